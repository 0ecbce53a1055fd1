use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::city::CityDetailDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AirportDto {
    pub id: i32,
    pub name: String,
    pub closest_big_city: i32,
}

/// Airport with its city and country flattened to names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AirportListDto {
    pub id: i32,
    pub name: String,
    pub closest_big_city: String,
    pub country: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AirportDetailDto {
    pub id: i32,
    pub name: String,
    pub closest_big_city: CityDetailDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateAirportDto {
    pub name: String,
    pub closest_big_city: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct PatchAirportDto {
    pub name: Option<String>,
    pub closest_big_city: Option<i32>,
}
