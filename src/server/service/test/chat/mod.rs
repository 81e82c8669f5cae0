use crate::server::{error::AppError, model::user::User, service::chat::ChatService};
use test_utils::{builder::TestBuilder, factory};

mod send;
mod threads;
