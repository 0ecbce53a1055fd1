use super::*;

/// Tests detection of a booked seat.
///
/// Expected: true for the booked seat, false for its neighbour
#[tokio::test]
async fn detects_booked_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let flight = factory::create_flight(db).await?;
    factory::helpers::create_booking(db, user.id, flight.id, 4, 4).await?;

    let repo = TicketRepository::new(db);
    let booked = TicketSpec {
        row: 4,
        seat: 4,
        flight_id: flight.id,
    };
    let free = TicketSpec { seat: 5, ..booked };

    assert!(repo.seat_taken(booked).await?);
    assert!(!repo.seat_taken(free).await?);

    Ok(())
}
