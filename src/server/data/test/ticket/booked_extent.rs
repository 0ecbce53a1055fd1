use super::*;

/// Tests the highest booked row and seat across flights.
///
/// Expected: maxima taken per column over the listed flights only
#[tokio::test]
async fn reports_highest_row_and_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_flight(db).await?;
    let second = factory::create_flight(db).await?;
    let other = factory::create_flight(db).await?;
    factory::helpers::create_booking(db, user.id, first.id, 7, 2).await?;
    factory::helpers::create_booking(db, user.id, second.id, 3, 5).await?;
    factory::helpers::create_booking(db, user.id, other.id, 9, 6).await?;

    let extent = TicketRepository::new(db)
        .booked_extent(vec![first.id, second.id])
        .await?;

    assert_eq!(extent, Some((7, 5)));

    Ok(())
}

/// Tests flights without bookings.
///
/// Expected: None for unbooked flights and for an empty flight list
#[tokio::test]
async fn none_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;
    let repo = TicketRepository::new(db);

    assert_eq!(repo.booked_extent(vec![flight.id]).await?, None);
    assert_eq!(repo.booked_extent(Vec::new()).await?, None);

    Ok(())
}
