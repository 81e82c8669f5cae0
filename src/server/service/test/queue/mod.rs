use chrono::{Days, NaiveDate};

use crate::{
    model::queue::QueueStatus,
    server::{
        error::AppError, model::queue::BookQueueParams, service::queue::QueueService,
        util::date::local_today,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod availability;
mod book;
mod update_status;

fn booking(room_type_id: i32, appointment_date: NaiveDate) -> BookQueueParams {
    BookQueueParams {
        first_name: "Malee".to_string(),
        last_name: "Chaiyo".to_string(),
        email: "malee@example.com".to_string(),
        phone: "0891234567".to_string(),
        room_type_id,
        appointment_date,
        note: None,
    }
}
