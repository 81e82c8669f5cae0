//! `SeaORM` entities for the dormitory schema.

pub mod prelude;

pub mod bill;
pub mod chat_message;
pub mod landing_page;
pub mod parcel;
pub mod queue;
pub mod room;
pub mod room_type;
pub mod task;
pub mod user;
