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
        country::{CountryDto, CreateCountryDto, PatchCountryDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::Payload,
            policy::{Action, AdminOrAuthenticatedReadOnly},
        },
        model::country::{CountryFilter, CreateCountryParams, UpdateCountryParams},
        service::country::CountryService,
        state::AppState,
        util::query::{parse_ordering, search_term},
    },
};

/// Tag for grouping country endpoints in OpenAPI documentation
pub static COUNTRY_TAG: &str = "country";

const ORDERING_FIELDS: &[&str] = &["name", "id"];

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CountryQuery {
    /// Case-insensitive substring of the name
    pub search: Option<String>,
    /// Comma-separated fields, `-` prefix for descending
    pub ordering: Option<String>,
}

/// List countries.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `query` - Search and ordering parameters
///
/// # Returns
/// - `200 OK` - Matching countries
/// - `401 Unauthorized` - Missing or invalid credentials
#[utoipa::path(
    get,
    path = "/api/airport/countries",
    tag = COUNTRY_TAG,
    params(CountryQuery),
    responses(
        (status = 200, description = "Matching countries", body = Vec<CountryDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_countries(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CountryQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let filter = CountryFilter {
        search: search_term(query.search.as_deref()),
    };
    let ordering = parse_ordering(query.ordering.as_deref(), ORDERING_FIELDS);

    let countries = CountryService::new(&state.db)
        .get_all(filter, ordering)
        .await?;

    let dtos: Vec<CountryDto> = countries.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a country.
///
/// # Access Control
/// - Staff only
///
/// # Returns
/// - `201 Created` - The created country
/// - `400 Bad Request` - Blank, too long or duplicate name
/// - `401 Unauthorized` - Missing or invalid credentials
/// - `403 Forbidden` - Authenticated user is not staff
#[utoipa::path(
    post,
    path = "/api/airport/countries",
    tag = COUNTRY_TAG,
    request_body = CreateCountryDto,
    responses(
        (status = 201, description = "Successfully created country", body = CountryDto),
        (status = 400, description = "Invalid country data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_country(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<CreateCountryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Create, None)
        .await?;

    let params = CreateCountryParams::from_dto(payload);
    let country = CountryService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(country.into_dto())))
}

/// Get a country by id.
#[utoipa::path(
    get,
    path = "/api/airport/countries/{id}",
    tag = COUNTRY_TAG,
    params(("id" = i32, Path, description = "Country id")),
    responses(
        (status = 200, description = "The country", body = CountryDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let country = CountryService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(country.into_dto())))
}

/// Replace a country.
#[utoipa::path(
    put,
    path = "/api/airport/countries/{id}",
    tag = COUNTRY_TAG,
    params(("id" = i32, Path, description = "Country id")),
    request_body = CreateCountryDto,
    responses(
        (status = 200, description = "Updated country", body = CountryDto),
        (status = 400, description = "Invalid country data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_country(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<CreateCountryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateCountryParams::from_put(payload);
    let country = CountryService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(country.into_dto())))
}

/// Partially update a country.
#[utoipa::path(
    patch,
    path = "/api/airport/countries/{id}",
    tag = COUNTRY_TAG,
    params(("id" = i32, Path, description = "Country id")),
    request_body = PatchCountryDto,
    responses(
        (status = 200, description = "Updated country", body = CountryDto),
        (status = 400, description = "Invalid country data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_country(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<PatchCountryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateCountryParams::from_patch(payload);
    let country = CountryService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(country.into_dto())))
}

/// Delete a country together with its cities and their airports.
#[utoipa::path(
    delete,
    path = "/api/airport/countries/{id}",
    tag = COUNTRY_TAG,
    params(("id" = i32, Path, description = "Country id")),
    responses(
        (status = 204, description = "Country deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_country(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Delete, None)
        .await?;

    CountryService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
