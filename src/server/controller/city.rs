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
        city::{CityDetailDto, CityDto, CreateCityDto, PatchCityDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::Payload,
            policy::{Action, AdminOrAuthenticatedReadOnly},
        },
        model::city::{CityFilter, CreateCityParams, UpdateCityParams},
        service::city::CityService,
        state::AppState,
        util::query::{parse_ordering, search_term},
    },
};

/// Tag for grouping city endpoints in OpenAPI documentation
pub static CITY_TAG: &str = "city";

const ORDERING_FIELDS: &[&str] = &["name", "id"];

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CityQuery {
    /// Case-insensitive substring match
    pub search: Option<String>,
    /// Country id
    pub country: Option<i32>,
    /// Comma-separated fields, `-` prefix for descending
    pub ordering: Option<String>,
}

/// List cities with their country embedded.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Matching cities
/// - `401 Unauthorized` - Missing or invalid credentials
#[utoipa::path(
    get,
    path = "/api/airport/cities",
    tag = CITY_TAG,
    params(CityQuery),
    responses(
        (status = 200, description = "Matching cities", body = Vec<CityDetailDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cities(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CityQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let filter = CityFilter {
        search: search_term(query.search.as_deref()),
        country_id: query.country,
    };
    let ordering = parse_ordering(query.ordering.as_deref(), ORDERING_FIELDS);

    let cities = CityService::new(&state.db).get_all(filter, ordering).await?;

    let dtos: Vec<CityDetailDto> = cities.into_iter().map(|item| item.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a city.
///
/// The time zone must be an IANA name such as `Europe/Kyiv`.
///
/// # Access Control
/// - Staff only
///
/// # Returns
/// - `201 Created` - The created city
/// - `400 Bad Request` - Invalid name or time zone
/// - `404 Not Found` - Unknown country
#[utoipa::path(
    post,
    path = "/api/airport/cities",
    tag = CITY_TAG,
    request_body = CreateCityDto,
    responses(
        (status = 201, description = "Successfully created city", body = CityDto),
        (status = 400, description = "Invalid city data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<CreateCityDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Create, None)
        .await?;

    let params = CreateCityParams::from_dto(payload);
    let city = CityService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(city.into_dto())))
}

/// Get a city with its country.
#[utoipa::path(
    get,
    path = "/api/airport/cities/{id}",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City id")),
    responses(
        (status = 200, description = "The city", body = CityDetailDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let city = CityService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(city.into_dto())))
}

/// Replace a city.
#[utoipa::path(
    put,
    path = "/api/airport/cities/{id}",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City id")),
    request_body = CreateCityDto,
    responses(
        (status = 200, description = "Updated city", body = CityDto),
        (status = 400, description = "Invalid city data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "City or referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<CreateCityDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateCityParams::from_put(payload);
    let city = CityService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(city.into_dto())))
}

/// Partially update a city.
#[utoipa::path(
    patch,
    path = "/api/airport/cities/{id}",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City id")),
    request_body = PatchCityDto,
    responses(
        (status = 200, description = "Updated city", body = CityDto),
        (status = 400, description = "Invalid city data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "City or referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<PatchCityDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateCityParams::from_patch(payload);
    let city = CityService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(city.into_dto())))
}

/// Delete a city together with its airports.
#[utoipa::path(
    delete,
    path = "/api/airport/cities/{id}",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City id")),
    responses(
        (status = 204, description = "City deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Delete, None)
        .await?;

    CityService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
