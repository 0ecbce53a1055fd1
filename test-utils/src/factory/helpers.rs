//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an order for `user_id` holding a single ticket on `flight_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the order
/// - `flight_id` - Flight the ticket is booked on
/// - `row` - Seat row
/// - `seat` - Seat number within the row
///
/// # Returns
/// - `Ok((order, ticket))` - Created order and its ticket
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    flight_id: i32,
    row: i32,
    seat: i32,
) -> Result<(entity::order::Model, entity::ticket::Model), DbErr> {
    let order = crate::factory::order::create_order(db, user_id).await?;
    let ticket = crate::factory::ticket::TicketFactory::new(db, flight_id, order.id)
        .row(row)
        .seat(seat)
        .build()
        .await?;

    Ok((order, ticket))
}

/// Creates a flight together with the full chain of reference data behind it.
///
/// Builds a country, city, two airports, a route between them, an airplane type and
/// an airplane with the given layout, then the flight itself.
///
/// # Returns
/// - `Ok((airplane, flight))` - The airplane used and the created flight
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_with_layout(
    db: &DatabaseConnection,
    rows: i32,
    seats_in_row: i32,
) -> Result<(entity::airplane::Model, entity::flight::Model), DbErr> {
    let airplane = crate::factory::airplane::AirplaneFactory::new(db)
        .rows(rows)
        .seats_in_row(seats_in_row)
        .build()
        .await?;
    let flight = crate::factory::flight::FlightFactory::new(db)
        .airplane_id(airplane.id)
        .build()
        .await?;

    Ok((airplane, flight))
}
