//! Bill factory.

use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for monthly bills. The total is always the sum of the four amounts.
pub struct BillFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    billing_month: NaiveDate,
    rent: i32,
    water: i32,
    electricity: i32,
    other: i32,
    due_date: NaiveDate,
    status: String,
}

impl<'a> BillFactory<'a> {
    /// Defaults: current month, rent 3500, water 100, electricity 400, due in the future.
    pub fn new(db: &'a DatabaseConnection, room_id: i32) -> Self {
        let today = Utc::now().date_naive();
        let month = today.with_day(1).unwrap_or(today);
        Self {
            db,
            room_id,
            billing_month: month,
            rent: 3500,
            water: 100,
            electricity: 400,
            other: 0,
            due_date: today + chrono::Duration::days(10),
            status: "unpaid".to_string(),
        }
    }

    pub fn billing_month(mut self, month: NaiveDate) -> Self {
        self.billing_month = month;
        self
    }

    pub fn rent(mut self, rent: i32) -> Self {
        self.rent = rent;
        self
    }

    pub fn other(mut self, other: i32) -> Self {
        self.other = other;
        self
    }

    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::bill::Model, DbErr> {
        let paid_at = (self.status == "paid").then(Utc::now);
        entity::bill::ActiveModel {
            room_id: ActiveValue::Set(self.room_id),
            billing_month: ActiveValue::Set(self.billing_month),
            rent: ActiveValue::Set(self.rent),
            water: ActiveValue::Set(self.water),
            electricity: ActiveValue::Set(self.electricity),
            other: ActiveValue::Set(self.other),
            total: ActiveValue::Set(self.rent + self.water + self.electricity + self.other),
            due_date: ActiveValue::Set(self.due_date),
            status: ActiveValue::Set(self.status),
            proof_image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            paid_at: ActiveValue::Set(paid_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_bill(db: &DatabaseConnection, room_id: i32) -> Result<entity::bill::Model, DbErr> {
    BillFactory::new(db, room_id).build().await
}
