use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{
            PatchUserDto, RefreshRequestDto, RegisterUserDto, TokenPairDto, TokenRequestDto,
            UpdateUserDto, UserDto,
        },
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, extract::Payload},
        model::user::{RegisterUserParams, UpdateProfileParams},
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user and token endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new account.
///
/// # Access Control
/// - Anyone
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Username, email, password and optional names
///
/// # Returns
/// - `201 Created` - The new profile
/// - `400 Bad Request` - Invalid or taken username, short password or bad email
#[utoipa::path(
    post,
    path = "/api/user/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Payload(payload): Payload<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::from_dto(payload);
    let user = UserService::new(&state.db).register(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Exchange credentials for an access and refresh token pair.
///
/// # Returns
/// - `200 OK` - Token pair
/// - `401 Unauthorized` - Unknown user, wrong password or inactive account
#[utoipa::path(
    post,
    path = "/api/user/token",
    tag = USER_TAG,
    request_body = TokenRequestDto,
    responses(
        (status = 200, description = "Token pair", body = TokenPairDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn obtain_token(
    State(state): State<AppState>,
    Payload(payload): Payload<TokenRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.jwt)
        .login(&payload.username, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Rotate a refresh token.
///
/// The presented token is revoked and cannot be used again.
///
/// # Returns
/// - `200 OK` - New token pair
/// - `401 Unauthorized` - Unknown, expired or revoked refresh token
#[utoipa::path(
    post,
    path = "/api/user/token/refresh",
    tag = USER_TAG,
    request_body = RefreshRequestDto,
    responses(
        (status = 200, description = "New token pair", body = TokenPairDto),
        (status = 401, description = "Invalid refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    Payload(payload): Payload<RefreshRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.jwt)
        .refresh(&payload.refresh)
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Revoke a refresh token.
#[utoipa::path(
    post,
    path = "/api/user/token/revoke",
    tag = USER_TAG,
    request_body = RefreshRequestDto,
    responses(
        (status = 204, description = "Token revoked"),
        (status = 401, description = "Invalid refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_token(
    State(state): State<AppState>,
    Payload(payload): Payload<RefreshRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.jwt)
        .revoke(&payload.refresh)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the caller's profile.
#[utoipa::path(
    get,
    path = "/api/user/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The caller's profile", body = UserDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require_user()
        .await?;

    let user = UserService::new(&state.db).get(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Replace the caller's profile. `email` and `is_staff` are read-only.
#[utoipa::path(
    put,
    path = "/api/user/me",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require_user()
        .await?;

    let params = UpdateProfileParams::from_put(payload);
    let user = UserService::new(&state.db)
        .update_profile(user.id, params)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Partially update the caller's profile.
#[utoipa::path(
    patch,
    path = "/api/user/me",
    tag = USER_TAG,
    request_body = PatchUserDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<PatchUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require_user()
        .await?;

    let params = UpdateProfileParams::from_patch(payload);
    let user = UserService::new(&state.db)
        .update_profile(user.id, params)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete the caller's account along with their orders and refresh tokens.
#[utoipa::path(
    delete,
    path = "/api/user/me",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require_user()
        .await?;

    UserService::new(&state.db).delete(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
