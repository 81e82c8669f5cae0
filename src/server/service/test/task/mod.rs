use crate::{
    model::task::{TaskKind, TaskStatus},
    server::{
        error::{auth::AuthError, AppError},
        model::{
            task::{CreateTaskParams, TaskFilter},
            user::User,
        },
        service::task::TaskService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod status;

fn leak_report(room_id: Option<i32>) -> CreateTaskParams {
    CreateTaskParams {
        room_id,
        kind: TaskKind::Maintenance,
        description: "Air conditioner drips".to_string(),
    }
}
