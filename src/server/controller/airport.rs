use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        airport::{
            AirportDetailDto, AirportDto, AirportListDto, CreateAirportDto, PatchAirportDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::Payload,
            policy::{Action, AdminOrAuthenticatedReadOnly},
        },
        model::airport::{AirportFilter, CreateAirportParams, UpdateAirportParams},
        service::airport::AirportService,
        state::AppState,
        util::query::{parse_ordering, search_term},
    },
};

/// Tag for grouping airport endpoints in OpenAPI documentation
pub static AIRPORT_TAG: &str = "airport";

const ORDERING_FIELDS: &[&str] = &["name", "id"];

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AirportQuery {
    /// Case-insensitive substring match
    pub search: Option<String>,
    /// Closest big city id
    pub city: Option<i32>,
    /// Country id of the closest big city
    pub country: Option<i32>,
    /// Comma-separated fields, `-` prefix for descending
    pub ordering: Option<String>,
}

/// List airports with their city and country names.
#[utoipa::path(
    get,
    path = "/api/airport/airports",
    tag = AIRPORT_TAG,
    params(AirportQuery),
    responses(
        (status = 200, description = "Matching airports", body = Vec<AirportListDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_airports(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AirportQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let filter = AirportFilter {
        search: search_term(query.search.as_deref()),
        city_id: query.city,
        country_id: query.country,
    };
    let ordering = parse_ordering(query.ordering.as_deref(), ORDERING_FIELDS);

    let airports = AirportService::new(&state.db).get_all(filter, ordering).await?;

    let dtos: Vec<AirportListDto> = airports.into_iter().map(|item| item.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create an airport near a city.
#[utoipa::path(
    post,
    path = "/api/airport/airports",
    tag = AIRPORT_TAG,
    request_body = CreateAirportDto,
    responses(
        (status = 201, description = "Successfully created airport", body = AirportDto),
        (status = 400, description = "Invalid airport data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_airport(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<CreateAirportDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Create, None)
        .await?;

    let params = CreateAirportParams::from_dto(payload);
    let airport = AirportService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(airport.into_dto())))
}

/// Get an airport with its city and country embedded.
#[utoipa::path(
    get,
    path = "/api/airport/airports/{id}",
    tag = AIRPORT_TAG,
    params(("id" = i32, Path, description = "Airport id")),
    responses(
        (status = 200, description = "The airport", body = AirportDetailDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Airport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_airport(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let airport = AirportService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(airport.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/airport/airports/{id}",
    tag = AIRPORT_TAG,
    params(("id" = i32, Path, description = "Airport id")),
    request_body = CreateAirportDto,
    responses(
        (status = 200, description = "Updated airport", body = AirportDto),
        (status = 400, description = "Invalid airport data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Airport or referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_airport(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<CreateAirportDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateAirportParams::from_put(payload);
    let airport = AirportService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(airport.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/airport/airports/{id}",
    tag = AIRPORT_TAG,
    params(("id" = i32, Path, description = "Airport id")),
    request_body = PatchAirportDto,
    responses(
        (status = 200, description = "Updated airport", body = AirportDto),
        (status = 400, description = "Invalid airport data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Airport or referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_airport(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<PatchAirportDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateAirportParams::from_patch(payload);
    let airport = AirportService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(airport.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/airport/airports/{id}",
    tag = AIRPORT_TAG,
    params(("id" = i32, Path, description = "Airport id")),
    responses(
        (status = 204, description = "Airport deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Airport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_airport(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Delete, None)
        .await?;

    AirportService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
