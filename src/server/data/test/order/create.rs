use super::*;

/// Tests creating an order with two tickets.
///
/// Expected: Ok with both tickets linked to the new order
#[tokio::test]
async fn creates_order_with_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let flight = factory::create_flight(db).await?;

    let params = CreateOrderParams {
        user_id: user.id,
        tickets: vec![
            TicketSpec {
                row: 1,
                seat: 1,
                flight_id: flight.id,
            },
            TicketSpec {
                row: 1,
                seat: 2,
                flight_id: flight.id,
            },
        ],
    };
    let order = OrderRepository::new(db).create(&params, Utc::now()).await?;

    assert_eq!(order.user_id, user.id);
    assert_eq!(order.tickets.len(), 2);
    assert!(order.tickets.iter().all(|t| t.order_id == order.id));

    Ok(())
}
