use crate::server::{
    data::{country::CountryRepository, is_unique_violation},
    model::country::{CountryFilter, CreateCountryParams, UpdateCountryParams},
    util::query::OrderingField,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;
