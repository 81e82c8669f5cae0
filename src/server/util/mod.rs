pub mod cookie;
pub mod image;
pub mod date;
pub mod password;
