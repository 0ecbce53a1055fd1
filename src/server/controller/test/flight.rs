use super::*;

fn flight_payload(
    route: i32,
    airplane: i32,
    departure: &str,
    arrival: &str,
    crew: Value,
) -> Value {
    json!({
        "route": route,
        "airplane": airplane,
        "flight_crew": crew,
        "departure_time": departure,
        "arrival_time": arrival
    })
}

/// Tests that arrival must come after departure.
///
/// Expected: 400 on `arrival_time` for equal and reversed times
#[tokio::test]
async fn rejects_arrival_not_after_departure() {
    let app = TestApp::new().await;
    let (_, staff) = app.staff_token().await;
    let route = factory::create_route(app.db()).await.unwrap();
    let airplane = factory::create_airplane(app.db()).await.unwrap();

    for arrival in ["2030-06-01T10:00:00Z", "2030-06-01T09:00:00Z"] {
        let (status, body) = app
            .post(
                "/api/airport/flights",
                Some(&staff),
                flight_payload(
                    route.id,
                    airplane.id,
                    "2030-06-01T10:00:00Z",
                    arrival,
                    json!([]),
                ),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            field_errors(&body, "arrival_time"),
            vec!["Arrival time must be after departure time."]
        );
    }
}

/// Tests patching only the departure against the stored arrival.
///
/// Expected: 400 when the new departure is after the stored arrival
#[tokio::test]
async fn validates_patch_against_stored_times() {
    let app = TestApp::new().await;
    let (_, staff) = app.staff_token().await;
    let flight = factory::create_flight(app.db()).await.unwrap();
    let departure = (flight.arrival_time + chrono::Duration::hours(1)).to_rfc3339();

    let (status, body) = app
        .send(
            Method::PATCH,
            &format!("/api/airport/flights/{}", flight.id),
            Some(&staff),
            Some(json!({ "departure_time": departure })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_errors(&body, "arrival_time").len(), 1);
}

/// Tests creating a flight with a crew roster and reading the detail view.
///
/// Expected: 201 with crew ids, detail embeds crew members and booked seats
#[tokio::test]
async fn creates_flight_with_crew() {
    let app = TestApp::new().await;
    let (admin, staff) = app.staff_token().await;
    let route = factory::create_route(app.db()).await.unwrap();
    let airplane = factory::create_airplane(app.db()).await.unwrap();
    let captain = factory::create_crew_member(app.db()).await.unwrap();

    let (status, created) = app
        .post(
            "/api/airport/flights",
            Some(&staff),
            flight_payload(
                route.id,
                airplane.id,
                "2030-06-01T10:00:00Z",
                "2030-06-01T12:30:00Z",
                json!([{ "crew_member": captain.id, "role": "CAPTAIN" }]),
            ),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["flight_crew"][0]["crew_member"], captain.id);

    let flight_id = created["id"].as_i64().unwrap() as i32;
    factory::helpers::create_booking(app.db(), admin.id, flight_id, 2, 3)
        .await
        .unwrap();

    let (status, detail) = app
        .get(&format!("/api/airport/flights/{}", flight_id), Some(&staff))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["flight_crew"][0]["role"], "CAPTAIN");
    assert_eq!(detail["flight_crew"][0]["crew_member"]["id"], captain.id);
    assert_eq!(detail["airplane"]["capacity"], 60);
    assert_eq!(detail["tickets"][0]["row"], 2);
    assert_eq!(detail["tickets"][0]["seat"], 3);
}

/// Tests moving a booked flight to another airplane.
///
/// Expected: 400 on `airplane` for a layout without the booked seat, 200 for one that has it
#[tokio::test]
async fn keeps_booked_seats_on_airplane_change() {
    let app = TestApp::new().await;
    let (staff, token) = app.staff_token().await;
    let (_, flight) = factory::helpers::create_flight_with_layout(app.db(), 30, 6)
        .await
        .unwrap();
    factory::helpers::create_booking(app.db(), staff.id, flight.id, 12, 5)
        .await
        .unwrap();
    let small = factory::airplane::AirplaneFactory::new(app.db())
        .rows(10)
        .seats_in_row(4)
        .build()
        .await
        .unwrap();
    let large = factory::airplane::AirplaneFactory::new(app.db())
        .rows(40)
        .seats_in_row(8)
        .build()
        .await
        .unwrap();
    let uri = format!("/api/airport/flights/{}", flight.id);

    let (rejected, body) = app
        .send(
            Method::PATCH,
            &uri,
            Some(&token),
            Some(json!({ "airplane": small.id })),
        )
        .await;
    let (moved, moved_body) = app
        .send(
            Method::PATCH,
            &uri,
            Some(&token),
            Some(json!({ "airplane": large.id })),
        )
        .await;

    assert_eq!(rejected, StatusCode::BAD_REQUEST);
    assert_eq!(field_errors(&body, "airplane").len(), 1);
    assert_eq!(moved, StatusCode::OK);
    assert_eq!(moved_body["airplane"], large.id);
}

/// Tests an unknown crew member on a flight.
///
/// Expected: 404
#[tokio::test]
async fn unknown_crew_member_is_not_found() {
    let app = TestApp::new().await;
    let (_, staff) = app.staff_token().await;
    let route = factory::create_route(app.db()).await.unwrap();
    let airplane = factory::create_airplane(app.db()).await.unwrap();

    let (status, _) = app
        .post(
            "/api/airport/flights",
            Some(&staff),
            flight_payload(
                route.id,
                airplane.id,
                "2030-06-01T10:00:00Z",
                "2030-06-01T12:00:00Z",
                json!([{ "crew_member": 4242, "role": "PURSER" }]),
            ),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

async fn patch_roster(mode: CrewRosterMode) -> usize {
    let app = TestApp::with_roster_mode(mode).await;
    let (_, staff) = app.staff_token().await;
    let flight = factory::create_flight(app.db()).await.unwrap();
    let old = factory::create_crew_member(app.db()).await.unwrap();
    let new = factory::create_crew_member(app.db()).await.unwrap();
    factory::flight::assign_crew(app.db(), flight.id, old.id, "CAPTAIN")
        .await
        .unwrap();

    let (status, body) = app
        .send(
            Method::PATCH,
            &format!("/api/airport/flights/{}", flight.id),
            Some(&staff),
            Some(json!({
                "flight_crew": [{ "crew_member": new.id, "role": "FIRST_OFFICER" }]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    body["flight_crew"].as_array().map(Vec::len).unwrap_or(0)
}

/// Tests the configured roster update mode.
///
/// Expected: merge keeps the existing captain, replace leaves only the new entry
#[tokio::test]
async fn roster_update_follows_mode() {
    assert_eq!(patch_roster(CrewRosterMode::Merge).await, 2);
    assert_eq!(patch_roster(CrewRosterMode::Replace).await, 1);
}

/// Tests listing flights filtered by departure day.
///
/// Expected: only the flight departing on that UTC day
#[tokio::test]
async fn lists_flights_by_departure_day() {
    let app = TestApp::new().await;
    let (_, user) = app.user_token().await;
    let day = chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2031, 3, 15, 9, 0, 0).unwrap();
    let matching = factory::flight::FlightFactory::new(app.db())
        .departure_time(day)
        .arrival_time(day + chrono::Duration::hours(2))
        .build()
        .await
        .unwrap();
    factory::create_flight(app.db()).await.unwrap();

    let (status, body) = app
        .get("/api/airport/flights?departure_time=2031-03-15", Some(&user))
        .await;

    assert_eq!(status, StatusCode::OK);
    let flights = body.as_array().unwrap();
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0]["id"], matching.id);
}
