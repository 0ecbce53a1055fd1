//! Order and ticket domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::order::{
        CreateOrderDto, OrderDetailDto, OrderDto, OrderListDto, TicketDetailDto, TicketDto,
        TicketListDto,
    },
    server::model::flight::{FlightListItem, FlightSummary},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub id: i32,
    pub row: i32,
    pub seat: i32,
    pub flight_id: i32,
    pub order_id: i32,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model) -> Self {
        Self {
            id: entity.id,
            row: entity.row,
            seat: entity.seat,
            flight_id: entity.flight_id,
            order_id: entity.order_id,
        }
    }

    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            row: self.row,
            seat: self.seat,
            flight: self.flight_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<Ticket>,
}

impl Order {
    pub fn from_entity(entity: entity::order::Model, tickets: Vec<Ticket>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            created_at: entity.created_at,
            tickets,
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            created_at: self.created_at,
            tickets: self.tickets.into_iter().map(Ticket::into_dto).collect(),
        }
    }
}

/// Order whose tickets carry a flight list item.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderListItem {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<(Ticket, FlightListItem)>,
}

impl OrderListItem {
    pub fn into_dto(self) -> OrderListDto {
        OrderListDto {
            id: self.id,
            created_at: self.created_at,
            tickets: self
                .tickets
                .into_iter()
                .map(|(ticket, flight)| TicketListDto {
                    id: ticket.id,
                    row: ticket.row,
                    seat: ticket.seat,
                    flight: flight.into_dto(),
                })
                .collect(),
        }
    }
}

/// Order whose tickets carry a full flight summary.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<(Ticket, FlightSummary)>,
}

impl OrderDetail {
    pub fn into_dto(self) -> OrderDetailDto {
        OrderDetailDto {
            id: self.id,
            created_at: self.created_at,
            tickets: self
                .tickets
                .into_iter()
                .map(|(ticket, flight)| TicketDetailDto {
                    id: ticket.id,
                    row: ticket.row,
                    seat: ticket.seat,
                    flight: flight.into_dto(),
                })
                .collect(),
        }
    }
}

/// Requested seat on a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketSpec {
    pub row: i32,
    pub seat: i32,
    pub flight_id: i32,
}

#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub user_id: i32,
    pub tickets: Vec<TicketSpec>,
}

impl CreateOrderParams {
    pub fn from_dto(user_id: i32, dto: CreateOrderDto) -> Self {
        Self {
            user_id,
            tickets: dto
                .tickets
                .into_iter()
                .map(|t| TicketSpec {
                    row: t.row,
                    seat: t.seat,
                    flight_id: t.flight,
                })
                .collect(),
        }
    }
}
