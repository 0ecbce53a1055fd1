use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

pub struct RefreshTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RefreshTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::refresh_token::Model, DbErr> {
        entity::refresh_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token_hash: ActiveValue::Set(token_hash),
            expires_at: ActiveValue::Set(expires_at),
            revoked_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a token by hash that is neither revoked nor expired at `now`.
    pub async fn find_active_by_hash(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::refresh_token::Model>, DbErr> {
        entity::prelude::RefreshToken::find()
            .filter(entity::refresh_token::Column::TokenHash.eq(token_hash))
            .filter(entity::refresh_token::Column::RevokedAt.is_null())
            .filter(entity::refresh_token::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }

    /// Marks a token revoked.
    ///
    /// # Returns
    /// - `Ok(true)` - This call revoked the token
    /// - `Ok(false)` - The token was already revoked
    pub async fn revoke(&self, id: i32, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::RefreshToken::update_many()
            .col_expr(entity::refresh_token::Column::RevokedAt, Expr::value(now))
            .filter(entity::refresh_token::Column::Id.eq(id))
            .filter(entity::refresh_token::Column::RevokedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
