//! Order factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an empty order owned by `user_id`.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    entity::order::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
