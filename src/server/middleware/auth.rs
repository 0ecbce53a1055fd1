//! Bearer token authentication.
//!
//! `AuthGuard` resolves the `Authorization` header of a request into a `Principal` and
//! checks it against an `AccessPolicy`. A request without the header is anonymous; a
//! header that is present must carry a valid access token for an active user.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::policy::{AccessPolicy, Action, Decision},
    service::auth::jwt::{validate_token, JwtConfig},
};

/// The identity a request acts as.
#[derive(Debug, Clone, PartialEq)]
pub enum Principal {
    Anonymous,
    User(entity::user::Model),
}

impl Principal {
    pub fn user(&self) -> Option<&entity::user::Model> {
        match self {
            Self::Anonymous => None,
            Self::User(user) => Some(user),
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtConfig,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtConfig, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Resolves the request's principal.
    ///
    /// # Returns
    /// - `Ok(Principal::Anonymous)` - No `Authorization` header
    /// - `Ok(Principal::User)` - Valid token for an active user
    /// - `Err(AppError::AuthErr)` - Malformed header, invalid or expired token, or the
    ///   token's user is missing or inactive
    pub async fn principal(&self) -> Result<Principal, AppError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Ok(Principal::Anonymous);
        };

        let token = value
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MalformedHeader)?;

        let claims =
            validate_token(token, self.jwt).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let user = UserRepository::new(self.db)
            .find_by_id(claims.sub)
            .await?
            .filter(|user| user.is_active)
            .ok_or(AuthError::UserNotActive(claims.sub))?;

        Ok(Principal::User(user))
    }

    /// Resolves the principal and requires an authenticated user.
    pub async fn require_user(&self) -> Result<entity::user::Model, AppError> {
        match self.principal().await? {
            Principal::User(user) => Ok(user),
            Principal::Anonymous => Err(AuthError::CredentialsMissing.into()),
        }
    }

    /// Resolves the principal and checks it against a policy.
    ///
    /// # Returns
    /// - `Ok(Principal)` - The policy allows the action
    /// - `Err(AuthError::CredentialsMissing)` - Denied for an anonymous request (401)
    /// - `Err(AuthError::AccessDenied)` - Denied for an authenticated user (403)
    pub async fn authorize(
        &self,
        policy: &impl AccessPolicy,
        action: Action,
        owner_id: Option<i32>,
    ) -> Result<Principal, AppError> {
        let principal = self.principal().await?;
        check(&principal, policy, action, owner_id)?;

        Ok(principal)
    }
}

/// Applies a policy to an already resolved principal.
pub fn check(
    principal: &Principal,
    policy: &impl AccessPolicy,
    action: Action,
    owner_id: Option<i32>,
) -> Result<(), AppError> {
    match (policy.check(principal, action, owner_id), principal) {
        (Decision::Allow, _) => Ok(()),
        (Decision::Deny, Principal::Anonymous) => Err(AuthError::CredentialsMissing.into()),
        (Decision::Deny, Principal::User(user)) => Err(AuthError::AccessDenied(
            user.id,
            format!("{} denied {:?}", policy.name(), action),
        )
        .into()),
    }
}
