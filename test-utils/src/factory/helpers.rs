//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a room type, a vacant room of that type and the room's companion account.
///
/// The account is linked to the room through `room_id` but the room has no renter.
///
/// # Returns
/// - `Ok((room_type, room, account))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_account(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::room_type::Model,
        entity::room::Model,
        entity::user::Model,
    ),
    DbErr,
> {
    let room_type = crate::factory::room_type::create_room_type(db).await?;
    let room = crate::factory::room::create_room(db, room_type.id).await?;
    let account = crate::factory::user::UserFactory::new(db)
        .username(room.room_number.clone())
        .room_id(Some(room.id))
        .build()
        .await?;

    Ok((room_type, room, account))
}

/// Creates a room whose companion account is the current renter.
///
/// Same as `create_room_with_account` but the room's `renter_id` points at the account
/// and the room is marked unavailable.
///
/// # Returns
/// - `Ok((room_type, room, tenant))` - Created entities, `room` reflecting the renter
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_tenant(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::room_type::Model,
        entity::room::Model,
        entity::user::Model,
    ),
    DbErr,
> {
    let (room_type, room, account) = create_room_with_account(db).await?;

    let mut active = room.into_active_model();
    active.renter_id = ActiveValue::Set(Some(account.id));
    active.available = ActiveValue::Set(false);
    let room = active.update(db).await?;

    Ok((room_type, room, account))
}
