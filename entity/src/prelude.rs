pub use super::bill::Entity as Bill;
pub use super::chat_message::Entity as ChatMessage;
pub use super::landing_page::Entity as LandingPage;
pub use super::parcel::Entity as Parcel;
pub use super::queue::Entity as Queue;
pub use super::room::Entity as Room;
pub use super::room_type::Entity as RoomType;
pub use super::task::Entity as Task;
pub use super::user::Entity as User;
