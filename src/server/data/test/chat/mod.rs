use crate::server::data::chat::ChatRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_thread;
mod latest_per_user;
