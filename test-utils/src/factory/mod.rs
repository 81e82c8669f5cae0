//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*` function for
//! quick default creation. Factories never create their foreign-key parents; pass the
//! parent id in, or use the `helpers` module which wires whole room setups together.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
//! let (room_type, room, account) = factory::helpers::create_room_with_tenant(db).await?;
//! let bill = factory::bill::BillFactory::new(db, room.id).rent(4500).build().await?;
//! ```

pub mod bill;
pub mod chat_message;
pub mod helpers;
pub mod parcel;
pub mod queue;
pub mod room;
pub mod room_type;
pub mod task;
pub mod user;

pub use bill::create_bill;
pub use chat_message::create_chat_message;
pub use parcel::create_parcel;
pub use queue::create_queue_entry;
pub use room::create_room;
pub use room_type::create_room_type;
pub use task::create_task;
pub use user::create_user;
