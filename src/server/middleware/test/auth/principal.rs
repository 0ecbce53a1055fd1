use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Ok(Principal::Anonymous)
#[tokio::test]
async fn resolves_anonymous_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt_config();
    let headers = HeaderMap::new();

    let principal = AuthGuard::new(db, &jwt, &headers).principal().await?;

    assert_eq!(principal, Principal::Anonymous);

    Ok(())
}

/// Tests a valid bearer token for an active user.
///
/// Expected: Ok(Principal::User) carrying the token's user
#[tokio::test]
async fn resolves_user_from_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt_config();

    let user = factory::create_user(db).await?;
    let headers = bearer_for(&user, &jwt);

    let principal = AuthGuard::new(db, &jwt, &headers).principal().await?;

    assert_eq!(principal.user().map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests a header that is not a bearer token.
///
/// Expected: Err(AuthError::MalformedHeader)
#[tokio::test]
async fn rejects_non_bearer_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt_config();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(db, &jwt, &headers).principal().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MalformedHeader))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_with_bad_signature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt_config();

    let user = factory::create_user(db).await?;
    let other = JwtConfig {
        secret: "some-other-secret".to_string(),
        ..jwt_config()
    };
    let headers = bearer_for(&user, &other);

    let result = AuthGuard::new(db, &jwt, &headers).principal().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user has been deactivated.
///
/// Expected: Err(AuthError::UserNotActive)
#[tokio::test]
async fn rejects_token_of_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt_config();

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    let headers = bearer_for(&user, &jwt);

    let result = AuthGuard::new(db, &jwt, &headers).principal().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotActive(id))) if id == user.id
    ));

    Ok(())
}

/// Tests require_user on an anonymous request.
///
/// Expected: Err(AuthError::CredentialsMissing)
#[tokio::test]
async fn require_user_rejects_anonymous() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt_config();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &jwt, &headers).require_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::CredentialsMissing))
    ));

    Ok(())
}
