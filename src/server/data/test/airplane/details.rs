use super::*;

/// Tests attaching airplane types.
///
/// Expected: each detail carries its own type
#[tokio::test]
async fn attaches_airplane_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await?;

    let repo = AirplaneRepository::new(db);
    let found = repo.get_by_id(airplane.id).await?.unwrap();
    let details = repo.details(vec![found]).await?;

    assert_eq!(details.len(), 1);
    assert_eq!(details[0].airplane_type.id, airplane.airplane_type_id);
    assert_eq!(details[0].airplane.capacity(), 60);

    Ok(())
}
