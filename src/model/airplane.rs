use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AirplaneTypeDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateAirplaneTypeDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct PatchAirplaneTypeDto {
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AirplaneDto {
    pub id: i32,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type: i32,
    pub capacity: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AirplaneDetailDto {
    pub id: i32,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type: AirplaneTypeDto,
    pub capacity: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateAirplaneDto {
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct PatchAirplaneDto {
    pub name: Option<String>,
    pub rows: Option<i32>,
    pub seats_in_row: Option<i32>,
    pub airplane_type: Option<i32>,
}
