//! Flight, crew roster and seat domain models.

use chrono::{DateTime, NaiveDate, Utc};
use std::{fmt, str::FromStr};

use crate::{
    model::flight::{
        CreateFlightDto, CrewRoleDto, FlightCrewDetailDto, FlightCrewDto, FlightCrewListDto,
        FlightDetailDto, FlightDto, FlightListDto, FlightSummaryDto, PatchFlightDto, SeatDto,
    },
    server::model::{
        airplane::AirplaneDetail,
        crew_member::CrewMember,
        route::{EndpointFilter, RouteDetail, RouteListItem},
    },
};

/// Role of a crew member on a flight, stored as its upper snake case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CrewRole {
    Captain,
    FirstOfficer,
    FlightAttendant,
    Purser,
    Dispatcher,
}

impl CrewRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Captain => "CAPTAIN",
            Self::FirstOfficer => "FIRST_OFFICER",
            Self::FlightAttendant => "FLIGHT_ATTENDANT",
            Self::Purser => "PURSER",
            Self::Dispatcher => "DISPATCHER",
        }
    }

    pub fn from_dto(dto: CrewRoleDto) -> Self {
        match dto {
            CrewRoleDto::Captain => Self::Captain,
            CrewRoleDto::FirstOfficer => Self::FirstOfficer,
            CrewRoleDto::FlightAttendant => Self::FlightAttendant,
            CrewRoleDto::Purser => Self::Purser,
            CrewRoleDto::Dispatcher => Self::Dispatcher,
        }
    }

    pub fn into_dto(self) -> CrewRoleDto {
        match self {
            Self::Captain => CrewRoleDto::Captain,
            Self::FirstOfficer => CrewRoleDto::FirstOfficer,
            Self::FlightAttendant => CrewRoleDto::FlightAttendant,
            Self::Purser => CrewRoleDto::Purser,
            Self::Dispatcher => CrewRoleDto::Dispatcher,
        }
    }
}

impl FromStr for CrewRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CAPTAIN" => Ok(Self::Captain),
            "FIRST_OFFICER" => Ok(Self::FirstOfficer),
            "FLIGHT_ATTENDANT" => Ok(Self::FlightAttendant),
            "PURSER" => Ok(Self::Purser),
            "DISPATCHER" => Ok(Self::Dispatcher),
            other => Err(format!("unknown crew role '{}'", other)),
        }
    }
}

/// How a flight update applies the crew roster from its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrewRosterMode {
    /// The roster becomes exactly the submitted set.
    #[default]
    Replace,
    /// Submitted entries are added; existing entries are kept.
    Merge,
}

impl FromStr for CrewRosterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "merge" => Ok(Self::Merge),
            _ => Err("expected 'replace' or 'merge'".to_string()),
        }
    }
}

impl fmt::Display for CrewRosterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace => write!(f, "replace"),
            Self::Merge => write!(f, "merge"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CrewAssignment {
    pub crew_member_id: i32,
    pub role: CrewRole,
}

impl CrewAssignment {
    pub fn from_entity(entity: &entity::flight_crew::Model) -> Result<Self, sea_orm::DbErr> {
        Ok(Self {
            crew_member_id: entity.crew_member_id,
            role: entity
                .role
                .parse()
                .map_err(|e: String| sea_orm::DbErr::Custom(e))?,
        })
    }

    pub fn from_dto(dto: FlightCrewDto) -> Self {
        Self {
            crew_member_id: dto.crew_member,
            role: CrewRole::from_dto(dto.role),
        }
    }

    pub fn into_dto(self) -> FlightCrewDto {
        FlightCrewDto {
            crew_member: self.crew_member_id,
            role: self.role.into_dto(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: i32,
    pub route_id: i32,
    pub airplane_id: i32,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub crew: Vec<CrewAssignment>,
}

impl Flight {
    pub fn from_entity(entity: entity::flight::Model, crew: Vec<CrewAssignment>) -> Self {
        Self {
            id: entity.id,
            route_id: entity.route_id,
            airplane_id: entity.airplane_id,
            departure_time: entity.departure_time,
            arrival_time: entity.arrival_time,
            crew,
        }
    }

    pub fn into_dto(self) -> FlightDto {
        FlightDto {
            id: self.id,
            route: self.route_id,
            airplane: self.airplane_id,
            flight_crew: self.crew.into_iter().map(CrewAssignment::into_dto).collect(),
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightListItem {
    pub id: i32,
    pub route: RouteListItem,
    pub airplane_name: String,
    /// Crew member full names with their roles.
    pub crew: Vec<(String, CrewRole)>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

impl FlightListItem {
    pub fn into_dto(self) -> FlightListDto {
        FlightListDto {
            id: self.id,
            route: self.route.into_dto(),
            airplane: self.airplane_name,
            flight_crew: self
                .crew
                .into_iter()
                .map(|(crew_member, role)| FlightCrewListDto {
                    crew_member,
                    role: role.into_dto(),
                })
                .collect(),
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
        }
    }
}

/// Flight with route, airplane and crew fully embedded.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub id: i32,
    pub route: RouteDetail,
    pub airplane: AirplaneDetail,
    pub crew: Vec<(CrewMember, CrewRole)>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

impl FlightSummary {
    fn crew_dtos(crew: Vec<(CrewMember, CrewRole)>) -> Vec<FlightCrewDetailDto> {
        crew.into_iter()
            .map(|(member, role)| FlightCrewDetailDto {
                crew_member: member.into_dto(),
                role: role.into_dto(),
            })
            .collect()
    }

    pub fn into_dto(self) -> FlightSummaryDto {
        FlightSummaryDto {
            id: self.id,
            route: self.route.into_dto(),
            airplane: self.airplane.into_dto(),
            flight_crew: Self::crew_dtos(self.crew),
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub id: i32,
    pub row: i32,
    pub seat: i32,
}

impl Seat {
    pub fn into_dto(self) -> SeatDto {
        SeatDto {
            id: self.id,
            row: self.row,
            seat: self.seat,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightDetail {
    pub summary: FlightSummary,
    pub seats: Vec<Seat>,
}

impl FlightDetail {
    pub fn into_dto(self) -> FlightDetailDto {
        let summary = self.summary;
        FlightDetailDto {
            id: summary.id,
            route: summary.route.into_dto(),
            airplane: summary.airplane.into_dto(),
            flight_crew: FlightSummary::crew_dtos(summary.crew),
            departure_time: summary.departure_time,
            arrival_time: summary.arrival_time,
            tickets: self.seats.into_iter().map(Seat::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFlightParams {
    pub route_id: i32,
    pub airplane_id: i32,
    pub crew: Vec<CrewAssignment>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

impl CreateFlightParams {
    pub fn from_dto(dto: CreateFlightDto) -> Self {
        Self {
            route_id: dto.route,
            airplane_id: dto.airplane,
            crew: dto
                .flight_crew
                .into_iter()
                .map(CrewAssignment::from_dto)
                .collect(),
            departure_time: dto.departure_time,
            arrival_time: dto.arrival_time,
        }
    }
}

/// Flight changes. `crew: None` leaves the roster untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateFlightParams {
    pub route_id: Option<i32>,
    pub airplane_id: Option<i32>,
    pub crew: Option<Vec<CrewAssignment>>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
}

impl UpdateFlightParams {
    pub fn from_put(dto: CreateFlightDto) -> Self {
        let create = CreateFlightParams::from_dto(dto);
        Self {
            route_id: Some(create.route_id),
            airplane_id: Some(create.airplane_id),
            crew: Some(create.crew),
            departure_time: Some(create.departure_time),
            arrival_time: Some(create.arrival_time),
        }
    }

    pub fn from_patch(dto: PatchFlightDto) -> Self {
        Self {
            route_id: dto.route,
            airplane_id: dto.airplane,
            crew: dto
                .flight_crew
                .map(|crew| crew.into_iter().map(CrewAssignment::from_dto).collect()),
            departure_time: dto.departure_time,
            arrival_time: dto.arrival_time,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlightFilter {
    pub search: Option<String>,
    pub route_id: Option<i32>,
    pub airplane_id: Option<i32>,
    /// UTC calendar day the flight departs on.
    pub departure_date: Option<NaiveDate>,
    /// UTC calendar day the flight arrives on.
    pub arrival_date: Option<NaiveDate>,
    pub endpoints: EndpointFilter,
}
