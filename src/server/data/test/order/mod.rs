use crate::server::{
    data::order::OrderRepository,
    model::order::{CreateOrderParams, TicketSpec},
    util::query::OrderingField,
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_for_user;
mod list_items;
