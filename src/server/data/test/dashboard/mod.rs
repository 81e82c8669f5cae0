use crate::server::data::dashboard::DashboardRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod stats;
