use super::*;

/// Tests creating a user.
///
/// Expected: active user with the given fields
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            username: "traveller".to_string(),
            email: "traveller@example.com".to_string(),
            password_hash: "hash".to_string(),
            first_name: "Taras".to_string(),
            last_name: String::new(),
            is_staff: false,
        })
        .await?;

    assert_eq!(user.username, "traveller");
    assert!(user.is_active);
    assert!(!user.is_staff);

    Ok(())
}
