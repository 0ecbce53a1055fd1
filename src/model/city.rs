use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::country::CountryDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CityDto {
    pub id: i32,
    pub name: String,
    pub country: i32,
    pub is_capital: bool,
    pub timezone: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CityDetailDto {
    pub id: i32,
    pub name: String,
    pub country: CountryDto,
    pub is_capital: bool,
    pub timezone: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCityDto {
    pub name: String,
    pub country: i32,
    #[serde(default)]
    pub is_capital: bool,
    pub timezone: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct PatchCityDto {
    pub name: Option<String>,
    pub country: Option<i32>,
    pub is_capital: Option<bool>,
    pub timezone: Option<String>,
}
