use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no credentials but the action requires a user.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authentication credentials were not provided")]
    CredentialsMissing,

    /// The `Authorization` header is present but is not a `Bearer` token.
    #[error("Malformed Authorization header")]
    MalformedHeader,

    /// The bearer token failed signature, expiry or format validation.
    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    /// The token subject no longer exists or has been deactivated.
    #[error("User {0} from access token not found or inactive")]
    UserNotActive(i32),

    /// Username and password did not match an active account.
    #[error("Invalid credentials for username {0}")]
    InvalidCredentials(String),

    /// The refresh token is unknown, expired or already revoked.
    #[error("Refresh token is invalid, expired or revoked")]
    InvalidRefreshToken,

    /// The authenticated user lacks permission for the action.
    ///
    /// Results in a 403 Forbidden response. The reason is only logged.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every failure is logged at debug level while the client receives a generic message.
///
/// # Returns
/// - 401 Unauthorized - Missing, malformed or invalid credentials and tokens
/// - 403 Forbidden - `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::CredentialsMissing => (
                StatusCode::UNAUTHORIZED,
                "Authentication credentials were not provided.",
            ),
            Self::MalformedHeader | Self::InvalidToken(_) | Self::UserNotActive(_) => {
                (StatusCode::UNAUTHORIZED, "Given token not valid.")
            }
            Self::InvalidCredentials(_) => (
                StatusCode::UNAUTHORIZED,
                "No active account found with the given credentials.",
            ),
            Self::InvalidRefreshToken => (StatusCode::UNAUTHORIZED, "Token is invalid or expired."),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action.",
            ),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
