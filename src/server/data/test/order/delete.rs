use super::*;

/// Tests deleting an order removes its tickets and frees the seat.
///
/// Expected: Ok(true) and no tickets left
#[tokio::test]
async fn deletes_order_and_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let flight = factory::create_flight(db).await?;
    let (order, _ticket) = factory::helpers::create_booking(db, user.id, flight.id, 2, 2).await?;

    let deleted = OrderRepository::new(db).delete(order.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Ticket::find().count(db).await?, 0);

    Ok(())
}
