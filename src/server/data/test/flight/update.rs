use super::*;

/// Tests that an update without crew leaves the roster untouched.
///
/// Expected: new departure time, same roster
#[tokio::test]
async fn keeps_roster_when_crew_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;
    let member = factory::create_crew_member(db).await?;
    factory::flight::assign_crew(db, flight.id, member.id, "CAPTAIN").await?;

    let departure = flight.departure_time - Duration::hours(1);
    let updated = FlightRepository::new(db)
        .update(
            flight.id,
            UpdateFlightParams {
                departure_time: Some(departure),
                ..Default::default()
            },
            CrewRosterMode::Replace,
        )
        .await?
        .unwrap();

    assert_eq!(updated.departure_time, departure);
    assert_eq!(updated.crew.len(), 1);

    Ok(())
}

/// Tests the two roster update modes side by side.
///
/// Expected: merge keeps the old assignment, replace drops it
#[tokio::test]
async fn applies_roster_mode() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let merged = factory::create_flight(db).await?;
    let replaced = factory::create_flight(db).await?;
    let old = factory::create_crew_member(db).await?;
    let new = factory::create_crew_member(db).await?;
    for flight in [&merged, &replaced] {
        factory::flight::assign_crew(db, flight.id, old.id, "CAPTAIN").await?;
    }

    let crew = vec![CrewAssignment {
        crew_member_id: new.id,
        role: CrewRole::FirstOfficer,
    }];
    let repo = FlightRepository::new(db);
    let after_merge = repo
        .update(
            merged.id,
            UpdateFlightParams {
                crew: Some(crew.clone()),
                arrival_time: Some(merged.arrival_time + Duration::minutes(30)),
                ..Default::default()
            },
            CrewRosterMode::Merge,
        )
        .await?
        .unwrap();
    let after_replace = repo
        .update(
            replaced.id,
            UpdateFlightParams {
                crew: Some(crew.clone()),
                arrival_time: Some(replaced.arrival_time + Duration::minutes(30)),
                ..Default::default()
            },
            CrewRosterMode::Replace,
        )
        .await?
        .unwrap();

    assert_eq!(after_merge.crew.len(), 2);
    assert_eq!(after_replace.crew, crew);

    Ok(())
}
