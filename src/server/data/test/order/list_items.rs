use super::*;

/// Tests embedding flight list items into order tickets.
///
/// Expected: each ticket carries its flight with route and airplane name
#[tokio::test]
async fn embeds_flight_list_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let airplane = factory::airplane::AirplaneFactory::new(db)
        .name("Mriya")
        .build()
        .await?;
    let flight = factory::flight::FlightFactory::new(db)
        .airplane_id(airplane.id)
        .build()
        .await?;
    factory::helpers::create_booking(db, user.id, flight.id, 1, 1).await?;

    let repo = OrderRepository::new(db);
    let orders = repo.get_for_user(user.id, &[]).await?;
    let items = repo.list_items(orders).await?;

    assert_eq!(items.len(), 1);
    let (ticket, flight_item) = &items[0].tickets[0];
    assert_eq!(ticket.flight_id, flight.id);
    assert_eq!(flight_item.id, flight.id);
    assert_eq!(flight_item.airplane_name, "Mriya");
    assert_eq!(flight_item.route.id, flight.route_id);

    Ok(())
}
