use super::*;

/// Tests an anonymous read of reference data.
///
/// Expected: Err(AuthError::CredentialsMissing), mapped to 401
#[tokio::test]
async fn denies_anonymous_with_credentials_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt_config();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::CredentialsMissing))
    ));

    Ok(())
}

/// Tests a regular user writing reference data.
///
/// Expected: Err(AuthError::AccessDenied), mapped to 403
#[tokio::test]
async fn denies_regular_user_write() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt_config();

    let user = factory::create_user(db).await?;
    let headers = bearer_for(&user, &jwt);

    let result = AuthGuard::new(db, &jwt, &headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Create, None)
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, user.id)
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests a regular user reading reference data and staff writing it.
///
/// Expected: Ok(Principal) for both
#[tokio::test]
async fn allows_user_read_and_staff_write() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt_config();

    let user = factory::create_user(db).await?;
    let staff = factory::create_staff_user(db).await?;
    let user_headers = bearer_for(&user, &jwt);
    let staff_headers = bearer_for(&staff, &jwt);

    let read = AuthGuard::new(db, &jwt, &user_headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Read, None)
        .await?;
    let write = AuthGuard::new(db, &jwt, &staff_headers)
        .authorize(&AdminOrAuthenticatedReadOnly, Action::Delete, None)
        .await?;

    assert_eq!(read.user().map(|u| u.id), Some(user.id));
    assert_eq!(write.user().map(|u| u.id), Some(staff.id));

    Ok(())
}

/// Tests order deletion by the owner and by another user.
///
/// Expected: Ok for the owner, Err(AccessDenied) for anyone else
#[tokio::test]
async fn order_delete_requires_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt_config();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let owner_headers = bearer_for(&owner, &jwt);
    let other_headers = bearer_for(&other, &jwt);

    let allowed = AuthGuard::new(db, &jwt, &owner_headers)
        .authorize(&OrderAccess, Action::Delete, Some(owner.id))
        .await;
    let denied = AuthGuard::new(db, &jwt, &other_headers)
        .authorize(&OrderAccess, Action::Delete, Some(owner.id))
        .await;

    assert!(allowed.is_ok());
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
