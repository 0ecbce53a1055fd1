use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Principal},
        policy::{Action, AdminOrAuthenticatedReadOnly, OrderAccess},
    },
    service::auth::jwt::{generate_access_token, JwtConfig},
};
use test_utils::{builder::TestBuilder, factory};

mod authorize;
mod principal;

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "middleware-test-secret".to_string(),
        access_token_expiry_mins: 5,
        refresh_token_expiry_days: 1,
    }
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn bearer_for(user: &entity::user::Model, jwt: &JwtConfig) -> HeaderMap {
    let token = generate_access_token(user.id, user.is_staff, jwt).unwrap();
    bearer(&token)
}
