use crate::server::{
    error::AppError,
    mail::recording::RecordingMailer,
    model::{
        parcel::{CreateParcelParams, ParcelFilter},
        user::User,
    },
    service::parcel::ParcelService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod pick_up;

fn delivery(room_id: i32) -> CreateParcelParams {
    CreateParcelParams {
        room_id,
        recipient_name: "Somchai".to_string(),
        carrier: Some("Kerry".to_string()),
        tracking_number: Some("KEX123456".to_string()),
    }
}
