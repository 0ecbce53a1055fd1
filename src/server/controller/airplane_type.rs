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
        airplane::{AirplaneTypeDto, CreateAirplaneTypeDto, PatchAirplaneTypeDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::Payload,
            policy::{Action, AdminOrAuthenticatedReadOnly},
        },
        model::airplane::{AirplaneTypeFilter, CreateAirplaneTypeParams, UpdateAirplaneTypeParams},
        service::airplane_type::AirplaneTypeService,
        state::AppState,
        util::query::{parse_ordering, search_term},
    },
};

/// Tag for grouping airplane type endpoints in OpenAPI documentation
pub static AIRPLANE_TYPE_TAG: &str = "airplane_type";

const ORDERING_FIELDS: &[&str] = &["name", "id"];

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AirplaneTypeQuery {
    /// Case-insensitive substring match
    pub search: Option<String>,
    /// Comma-separated fields, `-` prefix for descending
    pub ordering: Option<String>,
}

/// List airplane types.
#[utoipa::path(
    get,
    path = "/api/airport/airplane_types",
    tag = AIRPLANE_TYPE_TAG,
    params(AirplaneTypeQuery),
    responses(
        (status = 200, description = "Matching airplane types", body = Vec<AirplaneTypeDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_airplane_types(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AirplaneTypeQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let filter = AirplaneTypeFilter {
        search: search_term(query.search.as_deref()),
    };
    let ordering = parse_ordering(query.ordering.as_deref(), ORDERING_FIELDS);

    let airplane_types = AirplaneTypeService::new(&state.db).get_all(filter, ordering).await?;

    let dtos: Vec<AirplaneTypeDto> = airplane_types
        .into_iter()
        .map(|item| item.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create an airplane type. Names are unique.
#[utoipa::path(
    post,
    path = "/api/airport/airplane_types",
    tag = AIRPLANE_TYPE_TAG,
    request_body = CreateAirplaneTypeDto,
    responses(
        (status = 201, description = "Successfully created airplane type", body = AirplaneTypeDto),
        (status = 400, description = "Invalid airplane type data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_airplane_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<CreateAirplaneTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Create, None)
        .await?;

    let params = CreateAirplaneTypeParams::from_dto(payload);
    let airplane_type = AirplaneTypeService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(airplane_type.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/airport/airplane_types/{id}",
    tag = AIRPLANE_TYPE_TAG,
    params(("id" = i32, Path, description = "Airplane type id")),
    responses(
        (status = 200, description = "The airplane type", body = AirplaneTypeDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Airplane type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_airplane_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let airplane_type = AirplaneTypeService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(airplane_type.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/airport/airplane_types/{id}",
    tag = AIRPLANE_TYPE_TAG,
    params(("id" = i32, Path, description = "Airplane type id")),
    request_body = CreateAirplaneTypeDto,
    responses(
        (status = 200, description = "Updated airplane type", body = AirplaneTypeDto),
        (status = 400, description = "Invalid airplane type data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Airplane type or referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_airplane_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<CreateAirplaneTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateAirplaneTypeParams::from_put(payload);
    let airplane_type = AirplaneTypeService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(airplane_type.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/airport/airplane_types/{id}",
    tag = AIRPLANE_TYPE_TAG,
    params(("id" = i32, Path, description = "Airplane type id")),
    request_body = PatchAirplaneTypeDto,
    responses(
        (status = 200, description = "Updated airplane type", body = AirplaneTypeDto),
        (status = 400, description = "Invalid airplane type data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Airplane type or referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_airplane_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<PatchAirplaneTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateAirplaneTypeParams::from_patch(payload);
    let airplane_type = AirplaneTypeService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(airplane_type.into_dto())))
}

/// Delete an airplane type together with its airplanes.
#[utoipa::path(
    delete,
    path = "/api/airport/airplane_types/{id}",
    tag = AIRPLANE_TYPE_TAG,
    params(("id" = i32, Path, description = "Airplane type id")),
    responses(
        (status = 204, description = "Airplane type deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Airplane type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_airplane_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Delete, None)
        .await?;

    AirplaneTypeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
