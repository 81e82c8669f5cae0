use crate::{
    model::bill::BillStatus,
    server::{
        data::bill::BillRepository,
        model::bill::{BillFilter, CreateBillParams},
    },
};
use chrono::{Days, NaiveDate, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_overdue;
mod status;
