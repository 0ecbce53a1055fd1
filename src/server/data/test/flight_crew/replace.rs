use super::*;

/// Tests replacing a roster drops assignments missing from the new set.
///
/// Expected: only the submitted assignment remains
#[tokio::test]
async fn replaces_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;
    let old = factory::create_crew_member(db).await?;
    let new = factory::create_crew_member(db).await?;
    factory::flight::assign_crew(db, flight.id, old.id, "CAPTAIN").await?;

    let repo = FlightCrewRepository::new(db);
    let assignment = CrewAssignment {
        crew_member_id: new.id,
        role: CrewRole::Purser,
    };
    repo.replace(flight.id, &[assignment]).await?;

    assert_eq!(repo.get_for_flight(flight.id).await?, vec![assignment]);

    Ok(())
}

/// Tests replacing with an empty set.
///
/// Expected: empty roster
#[tokio::test]
async fn clears_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;
    let member = factory::create_crew_member(db).await?;
    factory::flight::assign_crew(db, flight.id, member.id, "FIRST_OFFICER").await?;

    let repo = FlightCrewRepository::new(db);
    repo.replace(flight.id, &[]).await?;

    assert!(repo.get_for_flight(flight.id).await?.is_empty());

    Ok(())
}
