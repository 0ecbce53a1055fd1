use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        flight::{CreateFlightDto, FlightDetailDto, FlightDto, FlightListDto, PatchFlightDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::Payload,
            policy::{Action, AdminOrAuthenticatedReadOnly},
        },
        model::{
            flight::{CreateFlightParams, FlightFilter, UpdateFlightParams},
            route::EndpointFilter,
        },
        service::flight::FlightService,
        state::AppState,
        util::query::{parse_ordering, search_term},
    },
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

const ORDERING_FIELDS: &[&str] = &["departure_time", "arrival_time", "id"];

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FlightQuery {
    /// Case-insensitive substring of a route airport name or the airplane name
    pub search: Option<String>,
    /// Route id
    pub route: Option<i32>,
    /// Airplane id
    pub airplane: Option<i32>,
    /// UTC date of departure, `YYYY-MM-DD`
    pub departure_time: Option<NaiveDate>,
    /// UTC date of arrival, `YYYY-MM-DD`
    pub arrival_time: Option<NaiveDate>,
    pub source_city: Option<i32>,
    pub destination_city: Option<i32>,
    pub source_airport: Option<i32>,
    pub destination_airport: Option<i32>,
    pub source_country: Option<i32>,
    pub destination_country: Option<i32>,
    /// Comma-separated fields, `-` prefix for descending
    pub ordering: Option<String>,
}

impl FlightQuery {
    fn into_filter(self) -> FlightFilter {
        FlightFilter {
            search: search_term(self.search.as_deref()),
            route_id: self.route,
            airplane_id: self.airplane,
            departure_date: self.departure_time,
            arrival_date: self.arrival_time,
            endpoints: EndpointFilter {
                source_city: self.source_city,
                destination_city: self.destination_city,
                source_airport: self.source_airport,
                destination_airport: self.destination_airport,
                source_country: self.source_country,
                destination_country: self.destination_country,
            },
        }
    }
}

/// List flights.
///
/// Each flight shows its route with airport names, the airplane name and the crew
/// roster with full names.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `query` - Search, filters and ordering
///
/// # Returns
/// - `200 OK` - Matching flights
/// - `400 Bad Request` - Malformed query parameter such as a bad date
/// - `401 Unauthorized` - Missing or invalid credentials
#[utoipa::path(
    get,
    path = "/api/airport/flights",
    tag = FLIGHT_TAG,
    params(FlightQuery),
    responses(
        (status = 200, description = "Matching flights", body = Vec<FlightListDto>),
        (status = 400, description = "Malformed query parameter", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_flights(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<FlightQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let ordering = parse_ordering(query.ordering.as_deref(), ORDERING_FIELDS);
    let filter = query.into_filter();

    let flights = FlightService::new(&state.db, state.crew_roster_update)
        .get_all(filter, ordering)
        .await?;

    let dtos: Vec<FlightListDto> = flights.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a flight with its crew roster.
///
/// The flight and its roster are written in one transaction.
///
/// # Access Control
/// - Staff only
///
/// # Returns
/// - `201 Created` - The created flight with crew ids and roles
/// - `400 Bad Request` - Arrival not after departure
/// - `404 Not Found` - Unknown route, airplane or crew member
#[utoipa::path(
    post,
    path = "/api/airport/flights",
    tag = FLIGHT_TAG,
    request_body = CreateFlightDto,
    responses(
        (status = 201, description = "Successfully created flight", body = FlightDto),
        (status = 400, description = "Invalid flight data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Route, airplane or crew member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<CreateFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Create, None)
        .await?;

    let params = CreateFlightParams::from_dto(payload);
    let flight = FlightService::new(&state.db, state.crew_roster_update)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(flight.into_dto())))
}

/// Get a flight with route, airplane, crew and booked seats.
#[utoipa::path(
    get,
    path = "/api/airport/flights/{id}",
    tag = FLIGHT_TAG,
    params(("id" = i32, Path, description = "Flight id")),
    responses(
        (status = 200, description = "The flight", body = FlightDetailDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let flight = FlightService::new(&state.db, state.crew_roster_update)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(flight.into_dto())))
}

/// Replace a flight.
///
/// The submitted roster is applied according to the configured crew roster mode:
/// `replace` makes it the exact roster, `merge` only adds entries.
#[utoipa::path(
    put,
    path = "/api/airport/flights/{id}",
    tag = FLIGHT_TAG,
    params(("id" = i32, Path, description = "Flight id")),
    request_body = CreateFlightDto,
    responses(
        (status = 200, description = "Updated flight", body = FlightDto),
        (status = 400, description = "Invalid flight data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Flight or referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_flight(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<CreateFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateFlightParams::from_put(payload);
    let flight = FlightService::new(&state.db, state.crew_roster_update)
        .update(id, params)
        .await?;

    Ok((StatusCode::OK, Json(flight.into_dto())))
}

/// Partially update a flight. Omitting `flight_crew` keeps the roster as is.
#[utoipa::path(
    patch,
    path = "/api/airport/flights/{id}",
    tag = FLIGHT_TAG,
    params(("id" = i32, Path, description = "Flight id")),
    request_body = PatchFlightDto,
    responses(
        (status = 200, description = "Updated flight", body = FlightDto),
        (status = 400, description = "Invalid flight data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Flight or referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_flight(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<PatchFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateFlightParams::from_patch(payload);
    let flight = FlightService::new(&state.db, state.crew_roster_update)
        .update(id, params)
        .await?;

    Ok((StatusCode::OK, Json(flight.into_dto())))
}

/// Delete a flight together with its roster and booked tickets.
#[utoipa::path(
    delete,
    path = "/api/airport/flights/{id}",
    tag = FLIGHT_TAG,
    params(("id" = i32, Path, description = "Flight id")),
    responses(
        (status = 204, description = "Flight deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_flight(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Delete, None)
        .await?;

    FlightService::new(&state.db, state.crew_roster_update)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
