use crate::server::{
    data::flight_crew::FlightCrewRepository,
    model::flight::{CrewAssignment, CrewRole},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod merge;
mod replace;
