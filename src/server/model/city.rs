use crate::{
    model::city::{CityDetailDto, CityDto, CreateCityDto, PatchCityDto},
    server::model::country::Country,
};

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub country_id: i32,
    pub is_capital: bool,
    pub timezone: String,
}

impl City {
    pub fn from_entity(entity: entity::city::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            country_id: entity.country_id,
            is_capital: entity.is_capital,
            timezone: entity.timezone,
        }
    }

    pub fn into_dto(self) -> CityDto {
        CityDto {
            id: self.id,
            name: self.name,
            country: self.country_id,
            is_capital: self.is_capital,
            timezone: self.timezone,
        }
    }
}

/// City with its country embedded.
#[derive(Debug, Clone, PartialEq)]
pub struct CityDetail {
    pub city: City,
    pub country: Country,
}

impl CityDetail {
    pub fn into_dto(self) -> CityDetailDto {
        CityDetailDto {
            id: self.city.id,
            name: self.city.name,
            country: self.country.into_dto(),
            is_capital: self.city.is_capital,
            timezone: self.city.timezone,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCityParams {
    pub name: String,
    pub country_id: i32,
    pub is_capital: bool,
    pub timezone: String,
}

impl CreateCityParams {
    pub fn from_dto(dto: CreateCityDto) -> Self {
        Self {
            name: dto.name,
            country_id: dto.country,
            is_capital: dto.is_capital,
            timezone: dto.timezone,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCityParams {
    pub name: Option<String>,
    pub country_id: Option<i32>,
    pub is_capital: Option<bool>,
    pub timezone: Option<String>,
}

impl UpdateCityParams {
    pub fn from_put(dto: CreateCityDto) -> Self {
        Self {
            name: Some(dto.name),
            country_id: Some(dto.country),
            is_capital: Some(dto.is_capital),
            timezone: Some(dto.timezone),
        }
    }

    pub fn from_patch(dto: PatchCityDto) -> Self {
        Self {
            name: dto.name,
            country_id: dto.country,
            is_capital: dto.is_capital,
            timezone: dto.timezone,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CityFilter {
    pub search: Option<String>,
    pub country_id: Option<i32>,
}
