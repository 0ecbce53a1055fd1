//! Request-level tests that drive the full router over an in-memory database.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{
    model::flight::CrewRosterMode,
    router::router,
    service::auth::jwt::{generate_access_token, JwtConfig},
    state::AppState,
};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod flight;
mod order;
mod user;

struct TestApp {
    /// Keeps the in-memory database alive for the router's connection.
    test: TestContext,
    router: Router,
    jwt: JwtConfig,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_roster_mode(CrewRosterMode::Replace).await
    }

    async fn with_roster_mode(mode: CrewRosterMode) -> Self {
        let test = TestBuilder::new()
            .with_booking_tables()
            .build()
            .await
            .unwrap();
        let jwt = JwtConfig {
            secret: "controller-test-secret".to_string(),
            access_token_expiry_mins: 5,
            refresh_token_expiry_days: 1,
        };
        let db = test.db.clone().unwrap();
        let router = router(AppState::new(db, jwt.clone(), mode));

        Self { test, router, jwt }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    fn token(&self, user: &entity::user::Model) -> String {
        generate_access_token(user.id, user.is_staff, &self.jwt).unwrap()
    }

    async fn user_token(&self) -> (entity::user::Model, String) {
        let user = factory::create_user(self.db()).await.unwrap();
        let token = self.token(&user);
        (user, token)
    }

    async fn staff_token(&self) -> (entity::user::Model, String) {
        let user = factory::create_staff_user(self.db()).await.unwrap();
        let token = self.token(&user);
        (user, token)
    }

    /// Sends a request and returns the status with the JSON body, or `Null` when empty.
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }
}

/// Field messages of a validation error body.
fn field_errors<'a>(body: &'a Value, field: &str) -> Vec<&'a str> {
    body["fields"][field]
        .as_array()
        .map(|messages| messages.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

fn ticket(flight_id: i32, row: i32, seat: i32) -> Value {
    json!({ "row": row, "seat": seat, "flight": flight_id })
}
