//! Rooms, their companion accounts and tenant assignment.
//!
//! Every room owns one user account whose username is the room number. Assigning a tenant
//! writes the tenant's details onto that account; vacating resets it, rotates its password
//! (revoking the departed tenant's tokens) and clears its chat thread.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::queue::QueueStatus,
    server::{
        config::AuthConfig,
        data::{
            chat::ChatRepository, queue::QueueRepository, room::RoomRepository,
            room_type::RoomTypeRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            room::{
                AssignTenantParams, CreateRoomParams, Room, RoomFilter, RoomWithCredentials,
                UpdateRoomParams,
            },
            user::{CreateUserParams, ProfileParams, User},
        },
        service::{auth::USERNAME_TAKEN_MESSAGE, room_type::ROOM_TYPE_NOT_FOUND_MESSAGE},
        storage::{resolve_optional_image, ObjectStorage},
        util::password::{generate_password, hash_password},
    },
};

pub const ROOM_NOT_FOUND_MESSAGE: &str = "ไม่พบห้อง";
pub const QUEUE_NOT_FOUND_MESSAGE: &str = "ไม่พบคิว";

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn ObjectStorage,
    auth: &'a AuthConfig,
}

impl<'a> RoomService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        storage: &'a dyn ObjectStorage,
        auth: &'a AuthConfig,
    ) -> Self {
        Self { db, storage, auth }
    }

    pub async fn get(&self, room_id: i32) -> Result<Room, AppError> {
        RoomRepository::new(self.db)
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(ROOM_NOT_FOUND_MESSAGE.to_string()))
    }

    pub async fn get_all(&self, filter: RoomFilter) -> Result<Vec<Room>, AppError> {
        Ok(RoomRepository::new(self.db).get_filtered(filter).await?)
    }

    /// The room of a room account.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The account has no room
    pub async fn get_mine(&self, user: &User) -> Result<Room, AppError> {
        let Some(room_id) = user.room_id else {
            return Err(AppError::NotFound("บัญชีนี้ไม่มีห้องพัก".to_string()));
        };

        self.get(room_id).await
    }

    /// Creates a room and provisions its account.
    ///
    /// The image is uploaded first, then the room is inserted, then the account is created with
    /// a generated password that is returned once.
    ///
    /// # Returns
    /// - `Ok(RoomWithCredentials)` - The room and its account credentials
    /// - `Err(AppError::NotFound)` - Room type does not exist
    /// - `Err(AppError::Conflict)` - Room number or username already in use
    pub async fn create(&self, params: CreateRoomParams) -> Result<RoomWithCredentials, AppError> {
        let room_repo = RoomRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        if RoomTypeRepository::new(self.db)
            .find_by_id(params.room_type_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(ROOM_TYPE_NOT_FOUND_MESSAGE.to_string()));
        }
        if room_repo.room_number_exists(&params.room_number).await? {
            return Err(AppError::Conflict("หมายเลขห้องนี้มีอยู่แล้ว".to_string()));
        }
        if user_repo.username_exists(&params.room_number).await? {
            return Err(AppError::Conflict(USERNAME_TAKEN_MESSAGE.to_string()));
        }

        let image_url = resolve_optional_image(self.storage, params.image.as_deref()).await?;

        let room = room_repo
            .create(
                params.room_number.clone(),
                params.room_type_id,
                params.floor,
                image_url,
            )
            .await?;

        let password = generate_password();
        let password_hash = hash_password(password.clone(), self.auth.bcrypt_cost).await?;
        let profile = ProfileParams::vacant(&room.room_number);
        user_repo
            .create(CreateUserParams {
                username: room.room_number.clone(),
                password_hash,
                first_name: profile.first_name,
                last_name: profile.last_name,
                email: None,
                phone: None,
                admin: false,
                room_id: Some(room.id),
            })
            .await?;

        tracing::info!(room_id = room.id, "Created room {}", room.room_number);

        Ok(RoomWithCredentials {
            room: self.get(room.id).await?,
            username: room.room_number,
            password,
        })
    }

    pub async fn update(&self, room_id: i32, params: UpdateRoomParams) -> Result<Room, AppError> {
        if RoomTypeRepository::new(self.db)
            .find_by_id(params.room_type_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(ROOM_TYPE_NOT_FOUND_MESSAGE.to_string()));
        }

        if !RoomRepository::new(self.db).update(room_id, params).await? {
            return Err(AppError::NotFound(ROOM_NOT_FOUND_MESSAGE.to_string()));
        }

        self.get(room_id).await
    }

    /// Deletes a vacant room together with its account.
    ///
    /// Tasks, bills and parcels of the room are removed by cascade.
    pub async fn delete(&self, room_id: i32) -> Result<(), AppError> {
        let room_repo = RoomRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let room = self.get(room_id).await?;
        if room.is_occupied() {
            return Err(AppError::Conflict(
                "ห้องนี้มีผู้เช่าอยู่ ไม่สามารถลบได้".to_string(),
            ));
        }

        let account = user_repo.find_by_room_id(room.id).await?;
        room_repo.delete(room.id).await?;
        if let Some(account) = account {
            user_repo.delete(account.id).await?;
        }

        tracing::info!(room_id = room.id, "Deleted room {}", room.room_number);

        Ok(())
    }

    /// Moves a tenant into a vacant, available room.
    ///
    /// With a queue entry, its contact details fill in the ones not given and the entry
    /// becomes `assigned`.
    ///
    /// # Returns
    /// - `Ok(Room)` - The now occupied room
    /// - `Err(AppError::Conflict)` - Room occupied or out of service, or queue entry unusable
    /// - `Err(AppError::NotFound)` - Room or queue entry missing
    pub async fn assign_tenant(
        &self,
        room_id: i32,
        params: AssignTenantParams,
    ) -> Result<Room, AppError> {
        let room_repo = RoomRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);
        let queue_repo = QueueRepository::new(self.db);

        let room = self.get(room_id).await?;
        if room.is_occupied() || !room.available {
            return Err(AppError::Conflict("ห้องนี้ไม่ว่าง".to_string()));
        }

        let account = self.room_account(room.id).await?;

        let mut email = params.email;
        let mut phone = params.phone;
        if let Some(queue_id) = params.queue_id {
            let entry = queue_repo
                .find_by_id(queue_id)
                .await?
                .ok_or_else(|| AppError::NotFound(QUEUE_NOT_FOUND_MESSAGE.to_string()))?;

            if !entry.status.is_active() {
                return Err(AppError::Conflict(
                    "คิวนี้ไม่อยู่ในสถานะที่จัดห้องได้".to_string(),
                ));
            }
            if entry.room_type_id != room.room_type_id {
                return Err(AppError::Conflict(
                    "คิวนี้จองประเภทห้องอื่น".to_string(),
                ));
            }

            email = email.or(Some(entry.email));
            phone = phone.or(Some(entry.phone));
        }

        user_repo
            .update_profile(
                account.id,
                ProfileParams {
                    first_name: params.first_name,
                    last_name: params.last_name,
                    email,
                    phone,
                },
            )
            .await?;
        room_repo.set_renter(room.id, Some(account.id), false).await?;

        if let Some(queue_id) = params.queue_id {
            queue_repo
                .update_status(queue_id, QueueStatus::Assigned)
                .await?;
        }

        tracing::info!(
            room_id = room.id,
            queue_id = ?params.queue_id,
            "Assigned tenant to room {}",
            room.room_number
        );

        self.get(room.id).await
    }

    /// Moves the tenant out, resets the account profile and issues a new password.
    ///
    /// The password change revokes tokens held by the departed tenant, and the account's chat
    /// thread is deleted so the next tenant starts with an empty conversation.
    pub async fn vacate(&self, room_id: i32) -> Result<RoomWithCredentials, AppError> {
        let room_repo = RoomRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let room = self.get(room_id).await?;
        if !room.is_occupied() {
            return Err(AppError::Conflict("ห้องนี้ว่างอยู่แล้ว".to_string()));
        }

        let account = self.room_account(room.id).await?;

        room_repo.set_renter(room.id, None, true).await?;
        user_repo
            .update_profile(account.id, ProfileParams::vacant(&room.room_number))
            .await?;

        let password = generate_password();
        let password_hash = hash_password(password.clone(), self.auth.bcrypt_cost).await?;
        user_repo
            .update_password_hash(account.id, password_hash)
            .await?;
        let cleared = ChatRepository::new(self.db)
            .delete_thread(account.id)
            .await?;

        tracing::info!(
            room_id = room.id,
            cleared_messages = cleared,
            "Vacated room {}",
            room.room_number
        );

        Ok(RoomWithCredentials {
            room: self.get(room.id).await?,
            username: account.username,
            password,
        })
    }

    async fn room_account(&self, room_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_room_id(room_id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Room {} has no account", room_id)))
    }
}

/// Room number and renter email of an occupied room, for notifications.
///
/// `None` when the room is vacant or the renter has no email.
pub(crate) async fn renter_contact(
    db: &DatabaseConnection,
    room_id: i32,
) -> Result<Option<(String, String)>, AppError> {
    let Some(room) = RoomRepository::new(db).find_by_id(room_id).await? else {
        return Ok(None);
    };

    Ok(room
        .renter
        .and_then(|renter| renter.email)
        .map(|email| (room.room_number, email)))
}
