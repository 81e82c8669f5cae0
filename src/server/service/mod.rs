//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the rules that go
//! beyond request shape (uniqueness, state transitions, ownership), coordinate several
//! repository calls, and trigger side effects such as uploads and best-effort email.
//! None of the check-then-act sequences run in a transaction.

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

#[cfg(test)]
mod test;
