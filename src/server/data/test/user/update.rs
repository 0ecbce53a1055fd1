use super::*;

/// Tests a partial profile update.
///
/// Expected: only the given fields change
#[tokio::test]
async fn updates_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("keep@example.com")
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UpdateUserParams {
                first_name: Some("Olena".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Olena");
    assert_eq!(updated.username, user.username);
    assert_eq!(updated.email, "keep@example.com");

    Ok(())
}
