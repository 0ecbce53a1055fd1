use crate::server::{
    data::{is_unique_violation, ticket::TicketRepository},
    model::order::TicketSpec,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod booked_extent;
mod create;
mod seat_taken;
