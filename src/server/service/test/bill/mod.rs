use chrono::NaiveDate;
use sea_orm::ConnectionTrait;

use super::PNG_DATA_URL;
use crate::{
    model::bill::BillStatus,
    server::{
        error::{auth::AuthError, AppError},
        mail::recording::RecordingMailer,
        model::{bill::CreateBillParams, user::User},
        service::bill::BillService,
        storage::memory::MemoryStorage,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod proof;
mod remind_overdue;

const APP_URL: &str = "https://dorm.test";

fn june_bill(room_id: i32) -> CreateBillParams {
    CreateBillParams {
        room_id,
        billing_month: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        rent: 3500,
        water: 120,
        electricity: 680,
        other: 0,
        due_date: NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
    }
}
