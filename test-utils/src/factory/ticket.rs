//! Ticket factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for tickets on an existing flight and order. Defaults to row 1, seat 1.
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    flight_id: i32,
    order_id: i32,
    row: i32,
    seat: i32,
}

impl<'a> TicketFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, flight_id: i32, order_id: i32) -> Self {
        Self {
            db,
            flight_id,
            order_id,
            row: 1,
            seat: 1,
        }
    }

    pub fn row(mut self, row: i32) -> Self {
        self.row = row;
        self
    }

    pub fn seat(mut self, seat: i32) -> Self {
        self.seat = seat;
        self
    }

    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            row: ActiveValue::Set(self.row),
            seat: ActiveValue::Set(self.seat),
            flight_id: ActiveValue::Set(self.flight_id),
            order_id: ActiveValue::Set(self.order_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_ticket(
    db: &DatabaseConnection,
    flight_id: i32,
    order_id: i32,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, flight_id, order_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn rejects_taken_seat() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let flight = factory::create_flight(db).await?;
        let order = factory::create_order(db, user.id).await?;

        create_ticket(db, flight.id, order.id).await?;
        let duplicate = create_ticket(db, flight.id, order.id).await;

        assert!(duplicate.is_err());

        Ok(())
    }
}
