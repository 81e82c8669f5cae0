use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Validate)]
pub struct RegisterDto {
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    #[validate(length(min = 6, max = 72))]
    pub password: String,
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64))]
    pub last_name: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Validate)]
pub struct ChangePasswordDto {
    pub current_password: String,
    #[validate(length(min = 6, max = 72))]
    pub new_password: String,
}

/// Login details of a room account, shown to the admin once.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct CredentialsDto {
    pub username: String,
    pub password: String,
}
