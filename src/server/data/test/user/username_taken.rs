use super::*;

/// Tests username collision checks with and without an excluded id.
///
/// Expected: taken for other users, free for the owner of the name
#[tokio::test]
async fn excludes_own_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("pilot")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_taken("pilot", None).await?);
    assert!(!repo.username_taken("pilot", Some(user.id)).await?);
    assert!(!repo.username_taken("navigator", None).await?);

    Ok(())
}
