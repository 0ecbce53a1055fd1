//! Booking service.
//!
//! An order is validated as a whole before anything is written: every ticket is checked
//! against its airplane's seat layout and against seats already booked, and the batch is
//! checked for repeated seats. Orders and tickets are then inserted in one transaction.
//! The unique index on `(flight_id, row, seat)` is the final guard; a violation raised
//! by the insert is reported as the same duplicate-ticket validation error.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use std::collections::HashSet;

use crate::server::{
    data::{
        airplane::AirplaneRepository, flight::FlightRepository, is_unique_violation,
        order::OrderRepository, ticket::TicketRepository,
    },
    error::{
        validation::{ValidationErrors, MIN_ONE_MESSAGE, NON_FIELD_ERRORS},
        AppError,
    },
    model::{
        airplane::Airplane,
        order::{CreateOrderParams, Order, OrderDetail, OrderListItem, TicketSpec},
    },
    util::query::OrderingField,
};

pub const DUPLICATE_TICKET: &str = "Duplicate ticket for this flight (row, seat)";
pub const DUPLICATE_IN_REQUEST: &str =
    "Duplicate tickets in request: (row, seat, flight) must be unique.";
pub const EMPTY_TICKETS: &str = "This list may not be empty.";

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and books an order.
    ///
    /// # Returns
    /// - `Ok(Order)` - The order and its tickets were created
    /// - `Err(AppError::NotFound)` - A ticket references an unknown flight
    /// - `Err(AppError::Validation)` - Empty batch, seat out of bounds, seat already
    ///   booked, or the same seat requested twice
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        if params.tickets.is_empty() {
            return Err(ValidationErrors::single("tickets", EMPTY_TICKETS).into());
        }

        let mut flight_ids: Vec<i32> = params.tickets.iter().map(|t| t.flight_id).collect();
        flight_ids.sort_unstable();
        flight_ids.dedup();

        let flights = FlightRepository::new(self.db)
            .get_entities_by_ids(flight_ids.clone())
            .await?;
        if let Some(missing) = flight_ids.iter().find(|id| !flights.contains_key(id)) {
            return Err(AppError::NotFound(format!("Flight {} not found", missing)));
        }

        let airplane_ids = flights.values().map(|f| f.airplane_id).collect();
        let airplanes = AirplaneRepository::new(self.db)
            .get_by_ids(airplane_ids)
            .await?;

        let ticket_repo = TicketRepository::new(self.db);
        let mut errors = ValidationErrors::new();
        for (index, spec) in params.tickets.iter().enumerate() {
            let airplane = flights
                .get(&spec.flight_id)
                .and_then(|flight| airplanes.get(&flight.airplane_id))
                .ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Airplane of flight {} not found", spec.flight_id))
                })?;

            let mut ticket_errors = check_seat_bounds(spec, airplane);
            if ticket_repo.seat_taken(*spec).await? {
                ticket_errors.add(NON_FIELD_ERRORS, DUPLICATE_TICKET);
            }
            errors.merge_nested(&format!("tickets[{}]", index), ticket_errors);
        }

        let mut seen = HashSet::new();
        if !params.tickets.iter().all(|spec| seen.insert(*spec)) {
            errors.add("tickets", DUPLICATE_IN_REQUEST);
        }

        errors.into_result()?;

        self.persist(params).await
    }

    /// Inserts a validated order in one transaction.
    ///
    /// A unique violation rolls the transaction back and is reported against every
    /// ticket whose seat turns out to be taken.
    pub(crate) async fn persist(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;

        match OrderRepository::new(&txn).create(&params, Utc::now()).await {
            Ok(order) => {
                txn.commit().await?;
                tracing::info!(
                    "User {} booked order {} with {} tickets",
                    order.user_id,
                    order.id,
                    order.tickets.len()
                );
                Ok(order)
            }
            Err(err) if is_unique_violation(&err) => {
                txn.rollback().await?;
                tracing::info!(
                    "Booking for user {} lost a seat race: {}",
                    params.user_id,
                    err
                );
                Err(self.duplicate_error(&params.tickets).await?.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn duplicate_error(&self, tickets: &[TicketSpec]) -> Result<ValidationErrors, DbErr> {
        let ticket_repo = TicketRepository::new(self.db);
        let mut errors = ValidationErrors::new();
        for (index, spec) in tickets.iter().enumerate() {
            if ticket_repo.seat_taken(*spec).await? {
                errors.add(
                    format!("tickets[{}].{}", index, NON_FIELD_ERRORS),
                    DUPLICATE_TICKET,
                );
            }
        }
        if errors.is_empty() {
            errors.add("tickets", DUPLICATE_TICKET);
        }

        Ok(errors)
    }

    /// Lists the user's own orders with flight list items on each ticket.
    pub async fn get_all(
        &self,
        user_id: i32,
        ordering: Vec<OrderingField>,
    ) -> Result<Vec<OrderListItem>, AppError> {
        let repo = OrderRepository::new(self.db);
        let orders = repo.get_for_user(user_id, &ordering).await?;

        Ok(repo.list_items(orders).await?)
    }

    /// Finds an order regardless of owner, for authorization decisions.
    pub async fn find(&self, id: i32) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Gets one of the user's own orders. Orders of other users are not found.
    pub async fn get_owned(&self, user_id: i32, id: i32) -> Result<OrderDetail, AppError> {
        let repo = OrderRepository::new(self.db);
        let order = repo
            .get_by_id(id)
            .await?
            .filter(|order| order.user_id == user_id)
            .ok_or_else(|| not_found(id))?;

        repo.details(vec![order])
            .await?
            .pop()
            .ok_or_else(|| not_found(id))
    }

    /// Deletes one of the user's own orders together with its tickets.
    pub async fn delete_owned(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = OrderRepository::new(&txn);

        let owned = repo
            .get_by_id(id)
            .await?
            .is_some_and(|order| order.user_id == user_id);
        if !owned {
            return Err(not_found(id));
        }

        repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!("User {} deleted order {}", user_id, id);

        Ok(())
    }
}

/// Checks a ticket's row and seat against the airplane layout.
fn check_seat_bounds(spec: &TicketSpec, airplane: &Airplane) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if spec.row < 1 {
        errors.add("row", MIN_ONE_MESSAGE);
    } else if spec.row > airplane.rows {
        errors.add(
            "row",
            format!(
                "Row {} exceeds airplane's max rows ({})",
                spec.row, airplane.rows
            ),
        );
    }

    if spec.seat < 1 {
        errors.add("seat", MIN_ONE_MESSAGE);
    } else if spec.seat > airplane.seats_in_row {
        errors.add(
            "seat",
            format!(
                "Seat {} exceeds airplane's max seats in row ({})",
                spec.seat, airplane.seats_in_row
            ),
        );
    }

    errors
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Order {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airplane(rows: i32, seats_in_row: i32) -> Airplane {
        Airplane {
            id: 1,
            name: "Boeing".to_string(),
            rows,
            seats_in_row,
            airplane_type_id: 1,
        }
    }

    fn spec(row: i32, seat: i32) -> TicketSpec {
        TicketSpec {
            row,
            seat,
            flight_id: 1,
        }
    }

    #[test]
    fn last_row_and_seat_are_in_bounds() {
        assert!(check_seat_bounds(&spec(30, 6), &airplane(30, 6)).is_empty());
    }

    #[test]
    fn row_past_layout_names_the_limit() {
        let errors = check_seat_bounds(&spec(31, 1), &airplane(30, 6));

        assert_eq!(
            errors.fields()["row"],
            vec!["Row 31 exceeds airplane's max rows (30)".to_string()]
        );
        assert!(!errors.fields().contains_key("seat"));
    }

    #[test]
    fn both_fields_reported_together() {
        let errors = check_seat_bounds(&spec(0, 7), &airplane(30, 6));

        assert_eq!(errors.fields()["row"], vec![MIN_ONE_MESSAGE.to_string()]);
        assert_eq!(
            errors.fields()["seat"],
            vec!["Seat 7 exceeds airplane's max seats in row (6)".to_string()]
        );
    }
}
