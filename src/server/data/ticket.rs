use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::order::{Ticket, TicketSpec};

pub struct TicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one ticket of an order.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The created ticket
    /// - `Err(DbErr)` - Database error; a taken seat fails the unique index on
    ///   `(flight_id, row, seat)`
    pub async fn create(&self, order_id: i32, spec: TicketSpec) -> Result<Ticket, DbErr> {
        let entity = entity::ticket::ActiveModel {
            row: ActiveValue::Set(spec.row),
            seat: ActiveValue::Set(spec.seat),
            flight_id: ActiveValue::Set(spec.flight_id),
            order_id: ActiveValue::Set(order_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ticket::from_entity(entity))
    }

    /// Whether the seat is already booked on the flight.
    pub async fn seat_taken(&self, spec: TicketSpec) -> Result<bool, DbErr> {
        let count = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::FlightId.eq(spec.flight_id))
            .filter(entity::ticket::Column::Row.eq(spec.row))
            .filter(entity::ticket::Column::Seat.eq(spec.seat))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Highest booked row and highest booked seat across the given flights.
    ///
    /// # Returns
    /// - `Ok(Some((row, seat)))` - The largest row and seat numbers in use, which may
    ///   come from different tickets
    /// - `Ok(None)` - No tickets are booked on those flights
    pub async fn booked_extent(&self, flight_ids: Vec<i32>) -> Result<Option<(i32, i32)>, DbErr> {
        if flight_ids.is_empty() {
            return Ok(None);
        }

        let extent = entity::prelude::Ticket::find()
            .select_only()
            .column_as(entity::ticket::Column::Row.max(), "max_row")
            .column_as(entity::ticket::Column::Seat.max(), "max_seat")
            .filter(entity::ticket::Column::FlightId.is_in(flight_ids))
            .into_tuple::<(Option<i32>, Option<i32>)>()
            .one(self.db)
            .await?;

        Ok(match extent {
            Some((Some(row), Some(seat))) => Some((row, seat)),
            _ => None,
        })
    }

    /// Tickets of several orders keyed by order id, in id order.
    pub async fn get_for_orders(
        &self,
        order_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<Ticket>>, DbErr> {
        let entities = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await?;

        let mut tickets: HashMap<i32, Vec<Ticket>> = HashMap::new();
        for entity in entities {
            tickets
                .entry(entity.order_id)
                .or_default()
                .push(Ticket::from_entity(entity));
        }

        Ok(tickets)
    }

    /// Booked tickets of a flight ordered by row then seat.
    pub async fn get_for_flight(&self, flight_id: i32) -> Result<Vec<Ticket>, DbErr> {
        let entities = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::FlightId.eq(flight_id))
            .order_by_asc(entity::ticket::Column::Row)
            .order_by_asc(entity::ticket::Column::Seat)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ticket::from_entity).collect())
    }

    pub async fn delete_for_order(&self, order_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Ticket::delete_many()
            .filter(entity::ticket::Column::OrderId.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
