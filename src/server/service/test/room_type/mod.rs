use super::PNG_DATA_URL;
use crate::server::{
    error::AppError, model::room_type::RoomTypeParams, service::room_type::RoomTypeService,
    storage::memory::MemoryStorage,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
