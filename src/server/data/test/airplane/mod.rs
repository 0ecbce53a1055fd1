use crate::server::{
    data::airplane::AirplaneRepository, model::airplane::AirplaneFilter,
    util::query::OrderingField,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod details;
mod get_all;
