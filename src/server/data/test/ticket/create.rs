use super::*;

/// Tests booking a seat that is already taken on the same flight.
///
/// Expected: Err recognised as a unique violation
#[tokio::test]
async fn rejects_taken_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let flight = factory::create_flight(db).await?;
    factory::helpers::create_booking(db, user.id, flight.id, 3, 2).await?;
    let order = factory::create_order(db, user.id).await?;

    let result = TicketRepository::new(db)
        .create(
            order.id,
            TicketSpec {
                row: 3,
                seat: 2,
                flight_id: flight.id,
            },
        )
        .await;

    assert!(result.as_ref().is_err_and(is_unique_violation));

    Ok(())
}

/// Tests the same seat on two different flights.
///
/// Expected: Ok for both
#[tokio::test]
async fn allows_same_seat_on_other_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_flight(db).await?;
    let second = factory::create_flight(db).await?;
    factory::helpers::create_booking(db, user.id, first.id, 1, 1).await?;
    let order = factory::create_order(db, user.id).await?;

    let ticket = TicketRepository::new(db)
        .create(
            order.id,
            TicketSpec {
                row: 1,
                seat: 1,
                flight_id: second.id,
            },
        )
        .await?;

    assert_eq!(ticket.flight_id, second.id);

    Ok(())
}
