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
        airplane::{
            AirplaneDetailDto, AirplaneDto, CreateAirplaneDto, PatchAirplaneDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::Payload,
            policy::{Action, AdminOrAuthenticatedReadOnly},
        },
        model::airplane::{AirplaneFilter, CreateAirplaneParams, UpdateAirplaneParams},
        service::airplane::AirplaneService,
        state::AppState,
        util::query::{parse_ordering, search_term},
    },
};

/// Tag for grouping airplane endpoints in OpenAPI documentation
pub static AIRPLANE_TAG: &str = "airplane";

const ORDERING_FIELDS: &[&str] = &["name", "rows", "seats_in_row", "capacity", "id"];

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AirplaneQuery {
    /// Case-insensitive substring of the airplane or airplane type name
    pub search: Option<String>,
    /// Airplane type id
    pub airplane_type: Option<i32>,
    /// Comma-separated fields, `-` prefix for descending
    pub ordering: Option<String>,
}

/// List airplanes with their type and derived capacity.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `query` - Search, type filter and ordering; `capacity` is a valid ordering field
///
/// # Returns
/// - `200 OK` - Matching airplanes
/// - `401 Unauthorized` - Missing or invalid credentials
#[utoipa::path(
    get,
    path = "/api/airport/airplanes",
    tag = AIRPLANE_TAG,
    params(AirplaneQuery),
    responses(
        (status = 200, description = "Matching airplanes", body = Vec<AirplaneDetailDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_airplanes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AirplaneQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let filter = AirplaneFilter {
        search: search_term(query.search.as_deref()),
        airplane_type_id: query.airplane_type,
    };
    let ordering = parse_ordering(query.ordering.as_deref(), ORDERING_FIELDS);

    let airplanes = AirplaneService::new(&state.db).get_all(filter, ordering).await?;

    let dtos: Vec<AirplaneDetailDto> = airplanes.into_iter().map(|item| item.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create an airplane.
///
/// # Access Control
/// - Staff only
///
/// # Returns
/// - `201 Created` - The created airplane including its capacity
/// - `400 Bad Request` - Blank name, or `rows` or `seats_in_row` below 1
/// - `404 Not Found` - Unknown airplane type
#[utoipa::path(
    post,
    path = "/api/airport/airplanes",
    tag = AIRPLANE_TAG,
    request_body = CreateAirplaneDto,
    responses(
        (status = 201, description = "Successfully created airplane", body = AirplaneDto),
        (status = 400, description = "Invalid airplane data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Airplane type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_airplane(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<CreateAirplaneDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Create, None)
        .await?;

    let params = CreateAirplaneParams::from_dto(payload);
    let airplane = AirplaneService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(airplane.into_dto())))
}

/// Get an airplane with its type.
#[utoipa::path(
    get,
    path = "/api/airport/airplanes/{id}",
    tag = AIRPLANE_TAG,
    params(("id" = i32, Path, description = "Airplane id")),
    responses(
        (status = 200, description = "The airplane", body = AirplaneDetailDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Airplane not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_airplane(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let airplane = AirplaneService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(airplane.into_dto())))
}

/// Replace an airplane. Capacity follows the new layout.
#[utoipa::path(
    put,
    path = "/api/airport/airplanes/{id}",
    tag = AIRPLANE_TAG,
    params(("id" = i32, Path, description = "Airplane id")),
    request_body = CreateAirplaneDto,
    responses(
        (status = 200, description = "Updated airplane", body = AirplaneDto),
        (status = 400, description = "Invalid airplane data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Airplane or referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_airplane(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<CreateAirplaneDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateAirplaneParams::from_put(payload);
    let airplane = AirplaneService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(airplane.into_dto())))
}

/// Partially update an airplane.
#[utoipa::path(
    patch,
    path = "/api/airport/airplanes/{id}",
    tag = AIRPLANE_TAG,
    params(("id" = i32, Path, description = "Airplane id")),
    request_body = PatchAirplaneDto,
    responses(
        (status = 200, description = "Updated airplane", body = AirplaneDto),
        (status = 400, description = "Invalid airplane data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Airplane or referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_airplane(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<PatchAirplaneDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateAirplaneParams::from_patch(payload);
    let airplane = AirplaneService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(airplane.into_dto())))
}

/// Delete an airplane together with its flights.
#[utoipa::path(
    delete,
    path = "/api/airport/airplanes/{id}",
    tag = AIRPLANE_TAG,
    params(("id" = i32, Path, description = "Airplane id")),
    responses(
        (status = 204, description = "Airplane deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Airplane not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_airplane(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Delete, None)
        .await?;

    AirplaneService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
