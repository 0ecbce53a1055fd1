use super::*;

/// Tests lookup of an active token.
///
/// Expected: Some for the stored hash, None for an unknown hash
#[tokio::test]
async fn finds_active_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);
    let stored = repo
        .create(user.id, "abc".to_string(), Utc::now() + Duration::days(1))
        .await?;

    let found = repo.find_active_by_hash("abc", Utc::now()).await?;
    let missing = repo.find_active_by_hash("xyz", Utc::now()).await?;

    assert_eq!(found.map(|t| t.id), Some(stored.id));
    assert!(missing.is_none());

    Ok(())
}

/// Tests that expired tokens are not returned.
///
/// Expected: None
#[tokio::test]
async fn ignores_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);
    repo.create(user.id, "old".to_string(), Utc::now() - Duration::minutes(1))
        .await?;

    assert!(repo.find_active_by_hash("old", Utc::now()).await?.is_none());

    Ok(())
}
