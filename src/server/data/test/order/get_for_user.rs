use super::*;

/// Tests that only the user's own orders are listed, newest first on request.
///
/// Expected: the user's two orders in descending creation order
#[tokio::test]
async fn lists_only_own_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let flight = factory::create_flight(db).await?;

    let repo = OrderRepository::new(db);
    let spec = |seat| TicketSpec {
        row: 1,
        seat,
        flight_id: flight.id,
    };
    let now = Utc::now();
    let older = repo
        .create(
            &CreateOrderParams {
                user_id: user.id,
                tickets: vec![spec(1)],
            },
            now - Duration::hours(1),
        )
        .await?;
    let newer = repo
        .create(
            &CreateOrderParams {
                user_id: user.id,
                tickets: vec![spec(2)],
            },
            now,
        )
        .await?;
    repo.create(
        &CreateOrderParams {
            user_id: other.id,
            tickets: vec![spec(3)],
        },
        now,
    )
    .await?;

    let ordering = vec![OrderingField {
        field: "created_at".to_string(),
        descending: true,
    }];
    let orders = repo.get_for_user(user.id, &ordering).await?;

    let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(orders[0].tickets[0].seat, 2);

    Ok(())
}
