use crate::server::{
    data::parcel::ParcelRepository,
    model::parcel::{CreateParcelParams, ParcelFilter},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod mark_picked_up;
