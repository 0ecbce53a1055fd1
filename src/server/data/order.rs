//! Order repository.
//!
//! An order and its tickets are written together; callers wrap `create` and `delete` in
//! a transaction so a failed ticket insert leaves no partial order behind.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use std::collections::HashMap;

use crate::server::{
    data::{flight::FlightRepository, ticket::TicketRepository},
    model::order::{CreateOrderParams, Order, OrderDetail, OrderListItem, Ticket},
    util::query::{apply_ordering, OrderingField},
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an order owned by `params.user_id` and one ticket per spec.
    pub async fn create(
        &self,
        params: &CreateOrderParams,
        created_at: DateTime<Utc>,
    ) -> Result<Order, DbErr> {
        let entity = entity::order::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let ticket_repo = TicketRepository::new(self.db);
        let mut tickets = Vec::with_capacity(params.tickets.len());
        for spec in &params.tickets {
            tickets.push(ticket_repo.create(entity.id, *spec).await?);
        }

        Ok(Order::from_entity(entity, tickets))
    }

    /// Finds an order regardless of owner.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some(entity) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut tickets = TicketRepository::new(self.db)
            .get_for_orders(vec![entity.id])
            .await?;
        let tickets = tickets.remove(&entity.id).unwrap_or_default();

        Ok(Some(Order::from_entity(entity, tickets)))
    }

    /// Orders owned by a user.
    pub async fn get_for_user(
        &self,
        user_id: i32,
        ordering: &[OrderingField],
    ) -> Result<Vec<Order>, DbErr> {
        let query =
            entity::prelude::Order::find().filter(entity::order::Column::UserId.eq(user_id));
        let query = apply_ordering(
            query,
            ordering,
            |field| match field {
                "created_at" => Some(entity::order::Column::CreatedAt),
                "id" => Some(entity::order::Column::Id),
                _ => None,
            },
            entity::order::Column::Id,
        );
        let entities = query.all(self.db).await?;

        let ids = entities.iter().map(|e| e.id).collect();
        let mut tickets = TicketRepository::new(self.db).get_for_orders(ids).await?;

        Ok(entities
            .into_iter()
            .map(|e| {
                let order_tickets = tickets.remove(&e.id).unwrap_or_default();
                Order::from_entity(e, order_tickets)
            })
            .collect())
    }

    /// Deletes an order and its tickets.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        TicketRepository::new(self.db).delete_for_order(id).await?;
        let result = entity::prelude::Order::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_items(&self, orders: Vec<Order>) -> Result<Vec<OrderListItem>, DbErr> {
        let flight_repo = FlightRepository::new(self.db);
        let flights = flight_repo.get_by_ids(flight_ids(&orders)).await?;
        let items: HashMap<i32, _> = flight_repo
            .list_items(flights.into_values().collect())
            .await?
            .into_iter()
            .map(|item| (item.id, item))
            .collect();

        orders
            .into_iter()
            .map(|order| {
                Ok(OrderListItem {
                    id: order.id,
                    created_at: order.created_at,
                    tickets: attach(order.tickets, &items)?,
                })
            })
            .collect()
    }

    pub async fn details(&self, orders: Vec<Order>) -> Result<Vec<OrderDetail>, DbErr> {
        let flight_repo = FlightRepository::new(self.db);
        let flights = flight_repo.get_by_ids(flight_ids(&orders)).await?;
        let summaries: HashMap<i32, _> = flight_repo
            .summaries(flights.into_values().collect())
            .await?
            .into_iter()
            .map(|summary| (summary.id, summary))
            .collect();

        orders
            .into_iter()
            .map(|order| {
                Ok(OrderDetail {
                    id: order.id,
                    created_at: order.created_at,
                    tickets: attach(order.tickets, &summaries)?,
                })
            })
            .collect()
    }
}

fn flight_ids(orders: &[Order]) -> Vec<i32> {
    let mut ids: Vec<i32> = orders
        .iter()
        .flat_map(|o| o.tickets.iter().map(|t| t.flight_id))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Pairs each ticket with its flight read model.
fn attach<T: Clone>(
    tickets: Vec<Ticket>,
    flights: &HashMap<i32, T>,
) -> Result<Vec<(Ticket, T)>, DbErr> {
    tickets
        .into_iter()
        .map(|ticket| {
            let flight = flights.get(&ticket.flight_id).cloned().ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Flight {} of ticket {} not found",
                    ticket.flight_id, ticket.id
                ))
            })?;
            Ok((ticket, flight))
        })
        .collect()
}
