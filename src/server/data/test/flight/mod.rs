use crate::server::{
    data::flight::FlightRepository,
    model::{
        flight::{CrewAssignment, CrewRole, CrewRosterMode, FlightFilter, UpdateFlightParams},
        route::EndpointFilter,
    },
    util::query::OrderingField,
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod update;
