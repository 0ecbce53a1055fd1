use super::*;

/// Tests merging keeps the existing roster and skips repeated entries.
///
/// Expected: existing captain kept, attendant added once
#[tokio::test]
async fn adds_missing_assignments_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;
    let captain = factory::create_crew_member(db).await?;
    let attendant = factory::create_crew_member(db).await?;
    factory::flight::assign_crew(db, flight.id, captain.id, "CAPTAIN").await?;

    let repo = FlightCrewRepository::new(db);
    let added = CrewAssignment {
        crew_member_id: attendant.id,
        role: CrewRole::FlightAttendant,
    };
    let existing = CrewAssignment {
        crew_member_id: captain.id,
        role: CrewRole::Captain,
    };
    repo.merge(flight.id, &[added, added, existing]).await?;

    let roster = repo.get_for_flight(flight.id).await?;
    assert_eq!(roster, vec![existing, added]);

    Ok(())
}

/// Tests the same crew member holding two roles.
///
/// Expected: both assignments stored
#[tokio::test]
async fn allows_two_roles_for_one_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;
    let member = factory::create_crew_member(db).await?;

    let repo = FlightCrewRepository::new(db);
    repo.merge(
        flight.id,
        &[
            CrewAssignment {
                crew_member_id: member.id,
                role: CrewRole::Captain,
            },
            CrewAssignment {
                crew_member_id: member.id,
                role: CrewRole::Dispatcher,
            },
        ],
    )
    .await?;

    assert_eq!(repo.get_for_flight(flight.id).await?.len(), 2);

    Ok(())
}
