use crate::{
    model::task::{TaskKind, TaskStatus},
    server::{data::task::TaskRepository, model::task::TaskFilter},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod complete;
mod create;
mod get_paginated;
