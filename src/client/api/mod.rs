#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod bill;

#[cfg(feature = "web")]
pub mod chat;

#[cfg(feature = "web")]
pub mod dashboard;

#[cfg(feature = "web")]
pub mod landing_page;

#[cfg(feature = "web")]
pub mod parcel;

#[cfg(feature = "web")]
pub mod queue;

#[cfg(feature = "web")]
pub mod room;

#[cfg(feature = "web")]
pub mod room_type;

#[cfg(feature = "web")]
pub mod task;

#[cfg(feature = "web")]
pub mod user;
