use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    airplane::AirplaneDetailDto,
    crew_member::CrewMemberDto,
    route::{RouteDetailDto, RouteListDto},
};

/// Crew role on a flight.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrewRoleDto {
    Captain,
    FirstOfficer,
    FlightAttendant,
    Purser,
    Dispatcher,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FlightCrewDto {
    pub crew_member: i32,
    pub role: CrewRoleDto,
}

/// Crew entry with the member rendered by full name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FlightCrewListDto {
    pub crew_member: String,
    pub role: CrewRoleDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FlightCrewDetailDto {
    pub crew_member: CrewMemberDto,
    pub role: CrewRoleDto,
}

/// A booked seat on a flight.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SeatDto {
    pub id: i32,
    pub row: i32,
    pub seat: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FlightDto {
    pub id: i32,
    pub route: i32,
    pub airplane: i32,
    pub flight_crew: Vec<FlightCrewDto>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FlightListDto {
    pub id: i32,
    pub route: RouteListDto,
    pub airplane: String,
    pub flight_crew: Vec<FlightCrewListDto>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

/// Flight with route, airplane and crew embedded but without its booked seats.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FlightSummaryDto {
    pub id: i32,
    pub route: RouteDetailDto,
    pub airplane: AirplaneDetailDto,
    pub flight_crew: Vec<FlightCrewDetailDto>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FlightDetailDto {
    pub id: i32,
    pub route: RouteDetailDto,
    pub airplane: AirplaneDetailDto,
    pub flight_crew: Vec<FlightCrewDetailDto>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub tickets: Vec<SeatDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateFlightDto {
    pub route: i32,
    pub airplane: i32,
    #[serde(default)]
    pub flight_crew: Vec<FlightCrewDto>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

/// Partial flight update. Omitting `flight_crew` leaves the roster untouched.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct PatchFlightDto {
    pub route: Option<i32>,
    pub airplane: Option<i32>,
    pub flight_crew: Option<Vec<FlightCrewDto>>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
}
