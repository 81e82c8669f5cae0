use crate::server::data::room_type::RoomTypeRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_references;
