use super::*;
use crate::server::service::user::{USERNAME_MESSAGE, USERNAME_TAKEN_MESSAGE};

async fn register(app: &TestApp, username: &str, password: &str) -> (StatusCode, Value) {
    app.post(
        "/api/user/register",
        None,
        json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": password,
        }),
    )
    .await
}

async fn login(app: &TestApp, username: &str, password: &str) -> (StatusCode, Value) {
    app.post(
        "/api/user/token",
        None,
        json!({ "username": username, "password": password }),
    )
    .await
}

/// Tests registering a regular account.
///
/// Expected: 201 with a non-staff user and no password in the body
#[tokio::test]
async fn registers_user() {
    let app = TestApp::new().await;

    let (status, body) = register(&app, "traveller_1", "secret").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "traveller_1");
    assert_eq!(body["is_staff"], false);
    assert!(body.get("password").is_none());
}

/// Tests username pattern, password length and email checks.
///
/// Expected: 400 with a message on each offending field
#[tokio::test]
async fn rejects_invalid_registration() {
    let app = TestApp::new().await;

    for username in ["a", "has space", "dash-ed", "пілот"] {
        let (status, body) = register(&app, username, "secret").await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "username {:?}", username);
        assert_eq!(field_errors(&body, "username"), vec![USERNAME_MESSAGE]);
    }

    let (status, body) = register(&app, "short_pw", "1234").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        field_errors(&body, "password"),
        vec!["Ensure this field has at least 5 characters."]
    );

    let (status, body) = app
        .post(
            "/api/user/register",
            None,
            json!({ "username": "mailer", "email": "not-an-email", "password": "secret" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        field_errors(&body, "email"),
        vec!["Enter a valid email address."]
    );
}

/// Tests registering a username twice.
///
/// Expected: 400 with the taken-username message
#[tokio::test]
async fn rejects_taken_username() {
    let app = TestApp::new().await;
    register(&app, "pilot", "secret").await;

    let (status, body) = register(&app, "pilot", "another").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_errors(&body, "username"), vec![USERNAME_TAKEN_MESSAGE]);
}

/// Tests the password login and using the access token.
///
/// Expected: token pair on success, and the access token resolves to the account
#[tokio::test]
async fn logs_in_and_reads_profile() {
    let app = TestApp::new().await;
    register(&app, "navigator", "secret").await;

    let (status, tokens) = login(&app, "navigator", "secret").await;
    let access = tokens["access"].as_str().unwrap_or_default().to_string();
    let (me_status, me) = app.get("/api/user/me", Some(&access)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(tokens["refresh"].is_string());
    assert_eq!(me_status, StatusCode::OK);
    assert_eq!(me["username"], "navigator");
}

/// Tests login with a wrong password and an unknown user.
///
/// Expected: 401 with the same message for both
#[tokio::test]
async fn rejects_bad_credentials() {
    let app = TestApp::new().await;
    register(&app, "navigator", "secret").await;

    let (wrong_password, body) = login(&app, "navigator", "wrong!").await;
    let (unknown_user, _) = login(&app, "nobody", "secret").await;

    assert_eq!(wrong_password, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["error"],
        "No active account found with the given credentials."
    );
    assert_eq!(unknown_user, StatusCode::UNAUTHORIZED);
}

/// Tests that a refresh token is single-use.
///
/// Expected: first refresh returns a new pair, reusing the old token is 401
#[tokio::test]
async fn rotates_refresh_token() {
    let app = TestApp::new().await;
    register(&app, "rotator", "secret").await;
    let (_, tokens) = login(&app, "rotator", "secret").await;
    let refresh = json!({ "refresh": tokens["refresh"] });

    let (first, rotated) = app
        .post("/api/user/token/refresh", None, refresh.clone())
        .await;
    let (reused, body) = app.post("/api/user/token/refresh", None, refresh).await;

    assert_eq!(first, StatusCode::OK);
    assert_ne!(rotated["refresh"], tokens["refresh"]);
    assert_eq!(reused, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Token is invalid or expired.");
}

/// Tests revoking a refresh token.
///
/// Expected: 204, then the token can no longer be refreshed or revoked again
#[tokio::test]
async fn revokes_refresh_token() {
    let app = TestApp::new().await;
    register(&app, "revoker", "secret").await;
    let (_, tokens) = login(&app, "revoker", "secret").await;
    let refresh = json!({ "refresh": tokens["refresh"] });

    let (revoked, _) = app
        .post("/api/user/token/revoke", None, refresh.clone())
        .await;
    let (refreshed, _) = app
        .post("/api/user/token/refresh", None, refresh.clone())
        .await;
    let (revoked_again, _) = app.post("/api/user/token/revoke", None, refresh).await;

    assert_eq!(revoked, StatusCode::NO_CONTENT);
    assert_eq!(refreshed, StatusCode::UNAUTHORIZED);
    assert_eq!(revoked_again, StatusCode::UNAUTHORIZED);
}

/// Tests the profile endpoints without a token.
///
/// Expected: 401
#[tokio::test]
async fn profile_requires_token() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/user/me", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Authentication credentials were not provided.");
}

/// Tests partial and full profile updates.
///
/// Expected: PATCH changes only the given field, PUT replaces names, staff flag unchanged
#[tokio::test]
async fn updates_profile() {
    let app = TestApp::new().await;
    let (user, token) = app.user_token().await;

    let (patched, body) = app
        .send(
            Method::PATCH,
            "/api/user/me",
            Some(&token),
            Some(json!({ "first_name": "Amelia" })),
        )
        .await;
    assert_eq!(patched, StatusCode::OK);
    assert_eq!(body["first_name"], "Amelia");
    assert_eq!(body["username"], user.username.as_str());

    let (put, body) = app
        .send(
            Method::PUT,
            "/api/user/me",
            Some(&token),
            Some(json!({
                "username": "amelia_e",
                "first_name": "Amelia",
                "last_name": "Earhart",
                "is_staff": true,
            })),
        )
        .await;
    assert_eq!(put, StatusCode::OK);
    assert_eq!(body["username"], "amelia_e");
    assert_eq!(body["last_name"], "Earhart");
    assert_eq!(body["is_staff"], false);
}

/// Tests renaming onto another user's username.
///
/// Expected: 400 with the taken-username message
#[tokio::test]
async fn rejects_rename_to_taken_username() {
    let app = TestApp::new().await;
    let (other, _) = app.user_token().await;
    let (_, token) = app.user_token().await;

    let (status, body) = app
        .send(
            Method::PATCH,
            "/api/user/me",
            Some(&token),
            Some(json!({ "username": other.username })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_errors(&body, "username"), vec![USERNAME_TAKEN_MESSAGE]);
}

/// Tests deleting the caller's account.
///
/// Expected: 204, then the old access token is rejected
#[tokio::test]
async fn deletes_account() {
    let app = TestApp::new().await;
    let (_, token) = app.user_token().await;

    let (deleted, _) = app
        .send(Method::DELETE, "/api/user/me", Some(&token), None)
        .await;
    let (after, _) = app.get("/api/user/me", Some(&token)).await;

    assert_eq!(deleted, StatusCode::NO_CONTENT);
    assert_eq!(after, StatusCode::UNAUTHORIZED);
}
