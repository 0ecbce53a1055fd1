use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::flight::{FlightListDto, FlightSummaryDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TicketDto {
    pub id: i32,
    pub row: i32,
    pub seat: i32,
    pub flight: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TicketListDto {
    pub id: i32,
    pub row: i32,
    pub seat: i32,
    pub flight: FlightListDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TicketDetailDto {
    pub id: i32,
    pub row: i32,
    pub seat: i32,
    pub flight: FlightSummaryDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<TicketDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OrderListDto {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<TicketListDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OrderDetailDto {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<TicketDetailDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateTicketDto {
    pub row: i32,
    pub seat: i32,
    pub flight: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateOrderDto {
    pub tickets: Vec<CreateTicketDto>,
}
