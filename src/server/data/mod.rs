//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table each and convert entity models into domain
//! models at this boundary. All methods return `DbErr`; business rules live in the services.

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
