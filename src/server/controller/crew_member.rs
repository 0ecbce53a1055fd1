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
        crew_member::{CreateCrewMemberDto, CrewMemberDto, PatchCrewMemberDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::Payload,
            policy::{Action, AdminOrAuthenticatedReadOnly},
        },
        model::crew_member::{CreateCrewMemberParams, CrewMemberFilter, UpdateCrewMemberParams},
        service::crew_member::CrewMemberService,
        state::AppState,
        util::query::{parse_ordering, search_term},
    },
};

/// Tag for grouping crew member endpoints in OpenAPI documentation
pub static CREW_MEMBER_TAG: &str = "crew_member";

const ORDERING_FIELDS: &[&str] = &["first_name", "last_name", "id"];

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CrewMemberQuery {
    /// Case-insensitive substring of the first or last name
    pub search: Option<String>,
    /// Comma-separated fields, `-` prefix for descending
    pub ordering: Option<String>,
}

/// List crew members.
#[utoipa::path(
    get,
    path = "/api/airport/crew_members",
    tag = CREW_MEMBER_TAG,
    params(CrewMemberQuery),
    responses(
        (status = 200, description = "Matching crew members", body = Vec<CrewMemberDto>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_crew_members(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CrewMemberQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let filter = CrewMemberFilter {
        search: search_term(query.search.as_deref()),
    };
    let ordering = parse_ordering(query.ordering.as_deref(), ORDERING_FIELDS);

    let crew_members = CrewMemberService::new(&state.db).get_all(filter, ordering).await?;

    let dtos: Vec<CrewMemberDto> = crew_members.into_iter().map(|item| item.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a crew member.
#[utoipa::path(
    post,
    path = "/api/airport/crew_members",
    tag = CREW_MEMBER_TAG,
    request_body = CreateCrewMemberDto,
    responses(
        (status = 201, description = "Successfully created crew member", body = CrewMemberDto),
        (status = 400, description = "Invalid crew member data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_crew_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<CreateCrewMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Create, None)
        .await?;

    let params = CreateCrewMemberParams::from_dto(payload);
    let crew_member = CrewMemberService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(crew_member.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/airport/crew_members/{id}",
    tag = CREW_MEMBER_TAG,
    params(("id" = i32, Path, description = "Crew member id")),
    responses(
        (status = 200, description = "The crew member", body = CrewMemberDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 404, description = "Crew member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_crew_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;

    let crew_member = CrewMemberService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(crew_member.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/airport/crew_members/{id}",
    tag = CREW_MEMBER_TAG,
    params(("id" = i32, Path, description = "Crew member id")),
    request_body = CreateCrewMemberDto,
    responses(
        (status = 200, description = "Updated crew member", body = CrewMemberDto),
        (status = 400, description = "Invalid crew member data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Crew member or referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_crew_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<CreateCrewMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateCrewMemberParams::from_put(payload);
    let crew_member = CrewMemberService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(crew_member.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/airport/crew_members/{id}",
    tag = CREW_MEMBER_TAG,
    params(("id" = i32, Path, description = "Crew member id")),
    request_body = PatchCrewMemberDto,
    responses(
        (status = 200, description = "Updated crew member", body = CrewMemberDto),
        (status = 400, description = "Invalid crew member data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Crew member or referenced resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_crew_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<PatchCrewMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Update, None)
        .await?;

    let params = UpdateCrewMemberParams::from_patch(payload);
    let crew_member = CrewMemberService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(crew_member.into_dto())))
}

/// Delete a crew member and remove them from every roster.
#[utoipa::path(
    delete,
    path = "/api/airport/crew_members/{id}",
    tag = CREW_MEMBER_TAG,
    params(("id" = i32, Path, description = "Crew member id")),
    responses(
        (status = 204, description = "Crew member deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Crew member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_crew_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Delete, None)
        .await?;

    CrewMemberService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
