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
        route::{CreateRouteDto, PatchRouteDto, RouteDetailDto, RouteDto, RouteListDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::Payload,
            policy::{Action, AdminOrAuthenticatedReadOnly},
        },
        model::route::{CreateRouteParams, EndpointFilter, RouteFilter, UpdateRouteParams},
        service::route::RouteService,
        state::AppState,
        util::query::{parse_ordering, search_term},
    },
};

/// Tag for grouping route endpoints in OpenAPI documentation
pub static ROUTE_TAG: &str = "route";

const ORDERING_FIELDS: &[&str] = &["distance", "id"];

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RouteQuery {
    /// Case-insensitive substring of the source or destination airport name
    pub search: Option<String>,
    /// Source airport's city id
    pub source_city: Option<i32>,
    /// Destination airport's city id
    pub destination_city: Option<i32>,
    pub source_airport: Option<i32>,
    pub destination_airport: Option<i32>,
    /// Source airport's country id
    pub source_country: Option<i32>,
    /// Destination airport's country id
    pub destination_country: Option<i32>,
    /// Comma-separated fields, `-` prefix for descending
    pub ordering: Option<String>,
}

/// List routes.
///
/// Endpoint filters combine with AND. City and country filters match the airport's
/// closest big city and that city's country.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Matching routes with airport names
/// - `401 Unauthorized` - Missing or invalid credentials
#[utoipa::path(
    get,
    path = "/api/airport/routes",
    tag = ROUTE_TAG,
    params(RouteQuery),
    responses(
        (status = 200, description = "Matching routes", body = Vec<RouteListDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RouteQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let filter = RouteFilter {
        search: search_term(query.search.as_deref()),
        endpoints: EndpointFilter {
            source_city: query.source_city,
            destination_city: query.destination_city,
            source_airport: query.source_airport,
            destination_airport: query.destination_airport,
            source_country: query.source_country,
            destination_country: query.destination_country,
        },
    };
    let ordering = parse_ordering(query.ordering.as_deref(), ORDERING_FIELDS);

    let routes = RouteService::new(&state.db).get_all(filter, ordering).await?;

    let dtos: Vec<RouteListDto> = routes.into_iter().map(|item| item.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a route between two airports.
///
/// # Returns
/// - `201 Created` - The created route
/// - `400 Bad Request` - Negative distance
/// - `404 Not Found` - Unknown source or destination airport
#[utoipa::path(
    post,
    path = "/api/airport/routes",
    tag = ROUTE_TAG,
    request_body = CreateRouteDto,
    responses(
        (status = 201, description = "Successfully created route", body = RouteDto),
        (status = 400, description = "Invalid route data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Airport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<CreateRouteDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Create, None)
        .await?;

    let params = CreateRouteParams::from_dto(payload);
    let route = RouteService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(route.into_dto())))
}

/// Get a route with both airports fully embedded.
#[utoipa::path(
    get,
    path = "/api/airport/routes/{id}",
    tag = ROUTE_TAG,
    params(("id" = i32, Path, description = "Route id")),
    responses(
        (status = 200, description = "The route", body = RouteDetailDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let route = RouteService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(route.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/airport/routes/{id}",
    tag = ROUTE_TAG,
    params(("id" = i32, Path, description = "Route id")),
    request_body = CreateRouteDto,
    responses(
        (status = 200, description = "Updated route", body = RouteDto),
        (status = 400, description = "Invalid route data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Route or referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<CreateRouteDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateRouteParams::from_put(payload);
    let route = RouteService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(route.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/airport/routes/{id}",
    tag = ROUTE_TAG,
    params(("id" = i32, Path, description = "Route id")),
    request_body = PatchRouteDto,
    responses(
        (status = 200, description = "Updated route", body = RouteDto),
        (status = 400, description = "Invalid route data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Route or referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<PatchRouteDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateRouteParams::from_patch(payload);
    let route = RouteService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(route.into_dto())))
}

/// Delete a route together with its flights.
#[utoipa::path(
    delete,
    path = "/api/airport/routes/{id}",
    tag = ROUTE_TAG,
    params(("id" = i32, Path, description = "Route id")),
    responses(
        (status = 204, description = "Route deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Delete, None)
        .await?;

    RouteService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
