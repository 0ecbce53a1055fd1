use super::*;

/// Tests that a token can be revoked exactly once.
///
/// Expected: true on the first call, false on the second, and no longer active
#[tokio::test]
async fn revokes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);
    let token = repo
        .create(user.id, "hash".to_string(), Utc::now() + Duration::days(1))
        .await?;

    assert!(repo.revoke(token.id, Utc::now()).await?);
    assert!(!repo.revoke(token.id, Utc::now()).await?);
    assert!(repo.find_active_by_hash("hash", Utc::now()).await?.is_none());

    Ok(())
}
