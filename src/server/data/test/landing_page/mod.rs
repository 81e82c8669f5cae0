use crate::server::{data::landing_page::LandingPageRepository, model::landing_page::LandingPage};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;
