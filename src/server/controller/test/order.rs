use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;
use crate::server::{
    error::AppError,
    model::order::{CreateOrderParams, TicketSpec},
    service::order::{OrderService, DUPLICATE_TICKET},
};

async fn flight_with_layout(app: &TestApp, rows: i32, seats_in_row: i32) -> i32 {
    let (_, flight) = factory::helpers::create_flight_with_layout(app.db(), rows, seats_in_row)
        .await
        .unwrap();
    flight.id
}

async fn persisted_counts(app: &TestApp) -> (u64, u64) {
    let orders = entity::prelude::Order::find().count(app.db()).await.unwrap();
    let tickets = entity::prelude::Ticket::find().count(app.db()).await.unwrap();
    (orders, tickets)
}

/// Tests booking a seat and resubmitting the identical order.
///
/// Expected: 201 then 400 with the duplicate-ticket message on the ticket
#[tokio::test]
async fn rejects_resubmitted_seat() {
    let app = TestApp::new().await;
    let (_, token) = app.user_token().await;
    let flight = flight_with_layout(&app, 30, 6).await;
    let payload = json!({ "tickets": [ticket(flight, 1, 1)] });

    let (first, created) = app
        .post("/api/airport/orders", Some(&token), payload.clone())
        .await;
    let (second, body) = app
        .post("/api/airport/orders", Some(&token), payload)
        .await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(created["tickets"][0]["flight"], flight);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(
        field_errors(&body, "tickets[0].non_field_errors"),
        vec![DUPLICATE_TICKET]
    );
    assert_eq!(persisted_counts(&app).await, (1, 1));
}

/// Tests seat bounds against the airplane layout.
///
/// Expected: seat 7 of 6 rejected with no order created
#[tokio::test]
async fn rejects_seat_past_layout() {
    let app = TestApp::new().await;
    let (_, token) = app.user_token().await;
    let flight = flight_with_layout(&app, 30, 6).await;

    let (status, body) = app
        .post(
            "/api/airport/orders",
            Some(&token),
            json!({ "tickets": [ticket(flight, 1, 7)] }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        field_errors(&body, "tickets[0].seat"),
        vec!["Seat 7 exceeds airplane's max seats in row (6)"]
    );
    assert_eq!(persisted_counts(&app).await, (0, 0));
}

/// Tests the last row is bookable and the one after it is not.
///
/// Expected: row 31 rejected on `row`, row 30 accepted
#[tokio::test]
async fn enforces_row_bound() {
    let app = TestApp::new().await;
    let (_, token) = app.user_token().await;
    let flight = flight_with_layout(&app, 30, 6).await;

    let (rejected, body) = app
        .post(
            "/api/airport/orders",
            Some(&token),
            json!({ "tickets": [ticket(flight, 31, 1)] }),
        )
        .await;
    let (accepted, _) = app
        .post(
            "/api/airport/orders",
            Some(&token),
            json!({ "tickets": [ticket(flight, 30, 1)] }),
        )
        .await;

    assert_eq!(rejected, StatusCode::BAD_REQUEST);
    assert_eq!(
        field_errors(&body, "tickets[0].row"),
        vec!["Row 31 exceeds airplane's max rows (30)"]
    );
    assert_eq!(accepted, StatusCode::CREATED);
}

/// Tests that one bad ticket fails the whole order.
///
/// Expected: 400 for a batch with a repeated seat, nothing persisted
#[tokio::test]
async fn batch_with_repeated_seat_persists_nothing() {
    let app = TestApp::new().await;
    let (_, token) = app.user_token().await;
    let flight = flight_with_layout(&app, 10, 4).await;

    let (status, body) = app
        .post(
            "/api/airport/orders",
            Some(&token),
            json!({
                "tickets": [ticket(flight, 1, 1), ticket(flight, 1, 2), ticket(flight, 1, 1)]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_errors(&body, "tickets").len(), 1);
    assert_eq!(persisted_counts(&app).await, (0, 0));
}

/// Tests an order without tickets.
///
/// Expected: 400 on `tickets`
#[tokio::test]
async fn rejects_empty_order() {
    let app = TestApp::new().await;
    let (_, token) = app.user_token().await;

    let (status, body) = app
        .post("/api/airport/orders", Some(&token), json!({ "tickets": [] }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        field_errors(&body, "tickets"),
        vec!["This list may not be empty."]
    );
}

/// Tests a ticket on a flight that does not exist.
///
/// Expected: 404 and nothing persisted
#[tokio::test]
async fn unknown_flight_is_not_found() {
    let app = TestApp::new().await;
    let (_, token) = app.user_token().await;

    let (status, _) = app
        .post(
            "/api/airport/orders",
            Some(&token),
            json!({ "tickets": [ticket(777, 1, 1)] }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(persisted_counts(&app).await, (0, 0));
}

/// Tests two concurrent orders for the same seat.
///
/// Expected: exactly one 201 and one 400, and a single stored ticket
#[tokio::test]
async fn concurrent_orders_book_seat_once() {
    let app = TestApp::new().await;
    let (_, first_token) = app.user_token().await;
    let (_, second_token) = app.user_token().await;
    let flight = flight_with_layout(&app, 30, 6).await;
    let payload = json!({ "tickets": [ticket(flight, 5, 5)] });

    let ((first, _), (second, _)) = tokio::join!(
        app.post("/api/airport/orders", Some(&first_token), payload.clone()),
        app.post("/api/airport/orders", Some(&second_token), payload.clone()),
    );

    let mut statuses = vec![first, second];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::BAD_REQUEST]);
    assert_eq!(persisted_counts(&app).await, (1, 1));
}

/// Tests the insert-time guard when a seat is taken after validation passed.
///
/// Expected: duplicate-ticket validation error on the raced ticket, order rolled back
#[tokio::test]
async fn insert_conflict_reports_duplicate_ticket() {
    let app = TestApp::new().await;
    let user = factory::create_user(app.db()).await.unwrap();
    let flight = flight_with_layout(&app, 10, 6).await;
    factory::helpers::create_booking(app.db(), user.id, flight, 2, 2)
        .await
        .unwrap();

    let result = OrderService::new(app.db())
        .persist(CreateOrderParams {
            user_id: user.id,
            tickets: vec![
                TicketSpec {
                    row: 1,
                    seat: 1,
                    flight_id: flight,
                },
                TicketSpec {
                    row: 2,
                    seat: 2,
                    flight_id: flight,
                },
            ],
        })
        .await;

    match result {
        Err(AppError::Validation(errors)) => {
            assert_eq!(
                errors.fields().get("tickets[1].non_field_errors"),
                Some(&vec![DUPLICATE_TICKET.to_string()])
            );
            assert!(!errors.fields().contains_key("tickets[0].non_field_errors"));
        }
        other => panic!("Expected validation error, got: {:?}", other),
    }
    assert_eq!(persisted_counts(&app).await, (1, 1));
}

/// Tests that orders of other users are invisible, including to staff.
///
/// Expected: owner 200, other user 404, staff 404, list scoped to the caller
#[tokio::test]
async fn isolates_orders_by_owner() {
    let app = TestApp::new().await;
    let (_, owner) = app.user_token().await;
    let (_, other) = app.user_token().await;
    let (_, staff) = app.staff_token().await;
    let flight = flight_with_layout(&app, 10, 6).await;

    let (_, created) = app
        .post(
            "/api/airport/orders",
            Some(&owner),
            json!({ "tickets": [ticket(flight, 1, 1)] }),
        )
        .await;
    let uri = format!("/api/airport/orders/{}", created["id"]);

    let (owner_status, detail) = app.get(&uri, Some(&owner)).await;
    let (other_status, _) = app.get(&uri, Some(&other)).await;
    let (staff_status, _) = app.get(&uri, Some(&staff)).await;
    let (_, other_list) = app.get("/api/airport/orders", Some(&other)).await;
    let (_, owner_list) = app.get("/api/airport/orders", Some(&owner)).await;

    assert_eq!(owner_status, StatusCode::OK);
    assert_eq!(detail["tickets"][0]["flight"]["id"], flight);
    assert_eq!(other_status, StatusCode::NOT_FOUND);
    assert_eq!(staff_status, StatusCode::NOT_FOUND);
    assert_eq!(other_list.as_array().map(Vec::len), Some(0));
    assert_eq!(owner_list.as_array().map(Vec::len), Some(1));
}

/// Tests order deletion across callers.
///
/// Expected: anonymous 401, other user 403, staff 404, owner 204 and the seat freed
#[tokio::test]
async fn delete_matrix() {
    let app = TestApp::new().await;
    let (_, owner) = app.user_token().await;
    let (_, other) = app.user_token().await;
    let (_, staff) = app.staff_token().await;
    let flight = flight_with_layout(&app, 10, 6).await;

    let payload = json!({ "tickets": [ticket(flight, 3, 3)] });
    let (_, created) = app
        .post("/api/airport/orders", Some(&owner), payload.clone())
        .await;
    let uri = format!("/api/airport/orders/{}", created["id"]);

    let (anonymous, _) = app.send(Method::DELETE, &uri, None, None).await;
    let (by_other, _) = app.send(Method::DELETE, &uri, Some(&other), None).await;
    let (by_staff, _) = app.send(Method::DELETE, &uri, Some(&staff), None).await;
    let (by_owner, _) = app.send(Method::DELETE, &uri, Some(&owner), None).await;
    let (missing, _) = app.send(Method::DELETE, &uri, Some(&owner), None).await;
    let (rebooked, _) = app
        .post("/api/airport/orders", Some(&other), payload)
        .await;

    assert_eq!(anonymous, StatusCode::UNAUTHORIZED);
    assert_eq!(by_other, StatusCode::FORBIDDEN);
    assert_eq!(by_staff, StatusCode::NOT_FOUND);
    assert_eq!(by_owner, StatusCode::NO_CONTENT);
    assert_eq!(missing, StatusCode::NOT_FOUND);
    assert_eq!(rebooked, StatusCode::CREATED);
}

/// Tests that orders cannot be changed once placed.
///
/// Expected: 405 for PUT
#[tokio::test]
async fn orders_are_immutable() {
    let app = TestApp::new().await;
    let (_, owner) = app.user_token().await;

    let (status, _) = app
        .send(
            Method::PUT,
            "/api/airport/orders/1",
            Some(&owner),
            Some(json!({ "tickets": [] })),
        )
        .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
