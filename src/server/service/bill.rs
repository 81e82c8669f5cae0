//! Monthly bills, payment proofs and overdue reminders.

use chrono::{NaiveDate, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::bill::BillStatus,
    server::{
        data::{bill::BillRepository, room::RoomRepository},
        error::{auth::AuthError, AppError},
        mail::{notify, template, Mailer},
        model::{
            bill::{Bill, BillFilter, CreateBillParams},
            pagination::Paginated,
            user::User,
        },
        service::room::{renter_contact, ROOM_NOT_FOUND_MESSAGE},
        storage::{resolve_image, ObjectStorage},
    },
};

pub const BILL_NOT_FOUND_MESSAGE: &str = "ไม่พบบิล";

pub struct BillService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn ObjectStorage,
    mailer: &'a dyn Mailer,
    app_url: &'a str,
}

impl<'a> BillService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        storage: &'a dyn ObjectStorage,
        mailer: &'a dyn Mailer,
        app_url: &'a str,
    ) -> Self {
        Self {
            db,
            storage,
            mailer,
            app_url,
        }
    }

    /// Issues a bill and emails the renter.
    ///
    /// The email is best-effort; a mail failure is logged and the bill is still returned.
    ///
    /// # Returns
    /// - `Ok(Bill)` - Unpaid bill
    /// - `Err(AppError::NotFound)` - Room does not exist
    /// - `Err(AppError::Conflict)` - The room already has a bill for that month
    pub async fn create(&self, params: CreateBillParams) -> Result<Bill, AppError> {
        let repo = BillRepository::new(self.db);

        if RoomRepository::new(self.db)
            .find_by_id(params.room_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(ROOM_NOT_FOUND_MESSAGE.to_string()));
        }
        if repo
            .exists_for_month(params.room_id, params.billing_month)
            .await?
        {
            return Err(AppError::Conflict(
                "ห้องนี้มีบิลของเดือนนี้อยู่แล้ว".to_string(),
            ));
        }

        let bill = repo.create(params).await?;

        tracing::info!(bill_id = bill.id, room_id = bill.room_id, "Issued bill");

        match renter_contact(self.db, bill.room_id).await {
            Ok(Some((room_number, email))) => {
                notify(
                    self.mailer,
                    template::bill_created(&email, &room_number, &bill, self.app_url),
                )
                .await;
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(bill_id = bill.id, "Renter lookup failed: {}", e),
        }

        Ok(bill)
    }

    /// Lists bills. Non-admin callers only see their own room.
    pub async fn get_paginated(
        &self,
        actor: &User,
        mut filter: BillFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Bill>, AppError> {
        if !actor.admin {
            let Some(room_id) = actor.room_id else {
                return Ok(Paginated {
                    items: Vec::new(),
                    total: 0,
                    page,
                    per_page,
                });
            };
            filter.room_id = Some(room_id);
        }

        let (bills, total) = BillRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        Ok(Paginated {
            items: bills,
            total,
            page,
            per_page,
        })
    }

    /// A bill visible to `actor`: any bill for admins, their room's bills otherwise.
    pub async fn get_for(&self, actor: &User, id: i32) -> Result<Bill, AppError> {
        let bill = self.get(id).await?;

        if !actor.admin && actor.room_id != Some(bill.room_id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("Bill {} belongs to another room", id),
            )
            .into());
        }

        Ok(bill)
    }

    /// Attaches a payment proof image and puts the bill up for review.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - Bill already paid
    pub async fn submit_proof(&self, actor: &User, id: i32, image: &str) -> Result<Bill, AppError> {
        let bill = self.get_for(actor, id).await?;
        if bill.status == BillStatus::Paid {
            return Err(AppError::Conflict("บิลนี้ชำระแล้ว".to_string()));
        }

        let url = resolve_image(self.storage, image).await?;
        BillRepository::new(self.db).set_proof(id, url).await?;

        tracing::info!(bill_id = id, "Payment proof submitted");

        self.get(id).await
    }

    /// Marks a bill paid (stamping `paid_at`) or back to unpaid (clearing it).
    pub async fn set_status(&self, id: i32, status: BillStatus) -> Result<Bill, AppError> {
        let paid_at = match status {
            BillStatus::Paid => Some(Utc::now()),
            BillStatus::Unpaid => None,
            BillStatus::PendingReview => {
                return Err(AppError::BadRequest(
                    "เปลี่ยนสถานะบิลได้เฉพาะชำระแล้วหรือยังไม่ชำระ".to_string(),
                ));
            }
        };

        if BillRepository::new(self.db)
            .set_status(id, status, paid_at)
            .await?
            == 0
        {
            return Err(AppError::NotFound(BILL_NOT_FOUND_MESSAGE.to_string()));
        }

        tracing::info!(bill_id = id, status = status.as_str(), "Bill status changed");

        self.get(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if BillRepository::new(self.db).delete(id).await? == 0 {
            return Err(AppError::NotFound(BILL_NOT_FOUND_MESSAGE.to_string()));
        }

        Ok(())
    }

    /// Emails the renter of every unpaid bill due before `today`.
    ///
    /// A failed renter lookup is logged and skips only that bill.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of reminders handed to the mailer
    pub async fn remind_overdue(&self, today: NaiveDate) -> Result<usize, AppError> {
        let bills = BillRepository::new(self.db).find_overdue(today).await?;

        let mut sent = 0;
        for bill in bills {
            let (room_number, email) = match renter_contact(self.db, bill.room_id).await {
                Ok(Some(contact)) => contact,
                Ok(None) => {
                    tracing::debug!(bill_id = bill.id, "Overdue bill has no renter email");
                    continue;
                }
                Err(e) => {
                    tracing::warn!(bill_id = bill.id, "Renter lookup failed: {}", e);
                    continue;
                }
            };

            notify(
                self.mailer,
                template::bill_overdue(&email, &room_number, &bill, self.app_url),
            )
            .await;
            sent += 1;
        }

        Ok(sent)
    }

    async fn get(&self, id: i32) -> Result<Bill, AppError> {
        BillRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(BILL_NOT_FOUND_MESSAGE.to_string()))
    }
}
