use super::*;

/// Tests detection of a staff account.
///
/// Expected: false with only regular users, true once staff exists
#[tokio::test]
async fn detects_staff_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    factory::create_user(db).await?;
    assert!(!repo.staff_exists().await?);

    factory::create_staff_user(db).await?;
    assert!(repo.staff_exists().await?);

    Ok(())
}
