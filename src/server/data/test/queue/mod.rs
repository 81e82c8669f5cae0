use crate::{
    model::queue::QueueStatus,
    server::{data::queue::QueueRepository, model::queue::BookQueueParams},
};
use chrono::{Days, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_active;
mod create;
mod get_paginated;
