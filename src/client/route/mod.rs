pub mod admin;
pub mod chat;
pub mod home;
pub mod login;
pub mod my_room;
pub mod not_found;
pub mod profile;
pub mod register;

pub use chat::Chat;
pub use home::Home;
pub use login::Login;
pub use my_room::MyRoom;
pub use not_found::NotFound;
pub use profile::Profile;
pub use register::Register;
