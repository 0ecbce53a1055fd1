use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::airport::{AirportDetailDto, AirportListDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RouteDto {
    pub id: i32,
    pub source: i32,
    pub destination: i32,
    pub distance: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RouteListDto {
    pub id: i32,
    pub source: AirportListDto,
    pub destination: AirportListDto,
    pub distance: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RouteDetailDto {
    pub id: i32,
    pub source: AirportDetailDto,
    pub destination: AirportDetailDto,
    pub distance: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateRouteDto {
    pub source: i32,
    pub destination: i32,
    pub distance: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct PatchRouteDto {
    pub source: Option<i32>,
    pub destination: Option<i32>,
    pub distance: Option<i32>,
}
