use super::auth_config;
use crate::{
    model::queue::QueueStatus,
    server::{
        data::{queue::QueueRepository, user::UserRepository},
        error::AppError,
        model::room::{AssignTenantParams, CreateRoomParams},
        service::{auth::AuthService, room::RoomService},
        storage::memory::MemoryStorage,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod assign_tenant;
mod create;
mod delete;
mod vacate;

fn tenant(queue_id: Option<i32>) -> AssignTenantParams {
    AssignTenantParams {
        queue_id,
        first_name: "Anan".to_string(),
        last_name: "Srisuk".to_string(),
        email: None,
        phone: None,
    }
}
