//! Token issuance for password login, refresh-token rotation and revocation.

pub mod jwt;
pub mod password;

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{refresh_token::RefreshTokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::TokenPair,
    service::auth::jwt::{
        generate_access_token, generate_refresh_token, hash_refresh_token, JwtConfig,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtConfig,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtConfig) -> Self {
        Self { db, jwt }
    }

    /// Exchanges a username and password for an access/refresh token pair.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Credentials matched an active user
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user, wrong password or
    ///   inactive account
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        };

        let verified = password::verify_password(password, &user.password_hash).unwrap_or_else(
            |e| {
                tracing::debug!("Stored password hash for user {} is unusable: {}", user.id, e);
                false
            },
        );

        if !verified || !user.is_active {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        let tokens = self.issue(self.db, user.id, user.is_staff).await?;

        tracing::info!("User {} logged in", user.id);

        Ok(tokens)
    }

    /// Rotates a refresh token.
    ///
    /// The presented token is revoked and a new pair is issued in the same transaction,
    /// so a refresh token can be used at most once.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let txn = self.db.begin().await?;

        let token_repo = RefreshTokenRepository::new(&txn);
        let Some(stored) = token_repo
            .find_active_by_hash(&hash_refresh_token(refresh_token), Utc::now())
            .await?
        else {
            return Err(AuthError::InvalidRefreshToken.into());
        };

        let Some(user) = UserRepository::new(&txn).find_by_id(stored.user_id).await? else {
            return Err(AuthError::InvalidRefreshToken.into());
        };
        if !user.is_active {
            return Err(AuthError::InvalidRefreshToken.into());
        }

        if !token_repo.revoke(stored.id, Utc::now()).await? {
            return Err(AuthError::InvalidRefreshToken.into());
        }

        let tokens = self.issue(&txn, user.id, user.is_staff).await?;

        txn.commit().await?;

        Ok(tokens)
    }

    /// Revokes a refresh token so it can no longer be rotated.
    pub async fn revoke(&self, refresh_token: &str) -> Result<(), AppError> {
        let token_repo = RefreshTokenRepository::new(self.db);

        let Some(stored) = token_repo
            .find_active_by_hash(&hash_refresh_token(refresh_token), Utc::now())
            .await?
        else {
            return Err(AuthError::InvalidRefreshToken.into());
        };

        token_repo.revoke(stored.id, Utc::now()).await?;

        tracing::info!("Revoked refresh token {} of user {}", stored.id, stored.user_id);

        Ok(())
    }

    async fn issue<C: sea_orm::ConnectionTrait>(
        &self,
        db: &C,
        user_id: i32,
        is_staff: bool,
    ) -> Result<TokenPair, AppError> {
        let access = generate_access_token(user_id, is_staff, self.jwt)?;
        let (refresh, refresh_hash) = generate_refresh_token();

        RefreshTokenRepository::new(db)
            .create(
                user_id,
                refresh_hash,
                Utc::now() + Duration::days(self.jwt.refresh_token_expiry_days),
            )
            .await?;

        Ok(TokenPair { access, refresh })
    }
}
