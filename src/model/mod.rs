//! DTOs shared between the server and the web client.

pub mod api;
pub mod auth;
pub mod bill;
pub mod chat;
pub mod dashboard;
pub mod landing_page;
pub mod parcel;
pub mod queue;
pub mod room;
pub mod room_type;
pub mod task;
pub mod user;
