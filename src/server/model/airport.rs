use crate::{
    model::airport::{
        AirportDetailDto, AirportDto, AirportListDto, CreateAirportDto, PatchAirportDto,
    },
    server::model::city::CityDetail,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub id: i32,
    pub name: String,
    pub closest_big_city_id: i32,
}

impl Airport {
    pub fn from_entity(entity: entity::airport::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            closest_big_city_id: entity.closest_big_city_id,
        }
    }

    pub fn into_dto(self) -> AirportDto {
        AirportDto {
            id: self.id,
            name: self.name,
            closest_big_city: self.closest_big_city_id,
        }
    }
}

/// Airport with its city and country reduced to their names.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportListItem {
    pub id: i32,
    pub name: String,
    pub city_name: String,
    pub country_name: String,
}

impl AirportListItem {
    pub fn into_dto(self) -> AirportListDto {
        AirportListDto {
            id: self.id,
            name: self.name,
            closest_big_city: self.city_name,
            country: self.country_name,
        }
    }
}

impl From<&AirportDetail> for AirportListItem {
    fn from(detail: &AirportDetail) -> Self {
        Self {
            id: detail.airport.id,
            name: detail.airport.name.clone(),
            city_name: detail.city.city.name.clone(),
            country_name: detail.city.country.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirportDetail {
    pub airport: Airport,
    pub city: CityDetail,
}

impl AirportDetail {
    pub fn into_dto(self) -> AirportDetailDto {
        AirportDetailDto {
            id: self.airport.id,
            name: self.airport.name,
            closest_big_city: self.city.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAirportParams {
    pub name: String,
    pub closest_big_city_id: i32,
}

impl CreateAirportParams {
    pub fn from_dto(dto: CreateAirportDto) -> Self {
        Self {
            name: dto.name,
            closest_big_city_id: dto.closest_big_city,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAirportParams {
    pub name: Option<String>,
    pub closest_big_city_id: Option<i32>,
}

impl UpdateAirportParams {
    pub fn from_put(dto: CreateAirportDto) -> Self {
        Self {
            name: Some(dto.name),
            closest_big_city_id: Some(dto.closest_big_city),
        }
    }

    pub fn from_patch(dto: PatchAirportDto) -> Self {
        Self {
            name: dto.name,
            closest_big_city_id: dto.closest_big_city,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AirportFilter {
    pub search: Option<String>,
    pub city_id: Option<i32>,
    pub country_id: Option<i32>,
}
