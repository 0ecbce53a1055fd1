//! Airplane and airplane type domain models.

use crate::model::airplane::{
    AirplaneDetailDto, AirplaneDto, AirplaneTypeDto, CreateAirplaneDto, CreateAirplaneTypeDto,
    PatchAirplaneDto, PatchAirplaneTypeDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AirplaneType {
    pub id: i32,
    pub name: String,
}

impl AirplaneType {
    pub fn from_entity(entity: entity::airplane_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> AirplaneTypeDto {
        AirplaneTypeDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAirplaneTypeParams {
    pub name: String,
}

impl CreateAirplaneTypeParams {
    pub fn from_dto(dto: CreateAirplaneTypeDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAirplaneTypeParams {
    pub name: Option<String>,
}

impl UpdateAirplaneTypeParams {
    pub fn from_put(dto: CreateAirplaneTypeDto) -> Self {
        Self {
            name: Some(dto.name),
        }
    }

    pub fn from_patch(dto: PatchAirplaneTypeDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AirplaneTypeFilter {
    pub search: Option<String>,
}

/// Airplane with a `rows` x `seats_in_row` seat layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Airplane {
    pub id: i32,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type_id: i32,
}

impl Airplane {
    pub fn from_entity(entity: entity::airplane::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            rows: entity.rows,
            seats_in_row: entity.seats_in_row,
            airplane_type_id: entity.airplane_type_id,
        }
    }

    /// Total number of seats.
    pub fn capacity(&self) -> i32 {
        self.rows * self.seats_in_row
    }

    pub fn into_dto(self) -> AirplaneDto {
        AirplaneDto {
            capacity: self.capacity(),
            id: self.id,
            name: self.name,
            rows: self.rows,
            seats_in_row: self.seats_in_row,
            airplane_type: self.airplane_type_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirplaneDetail {
    pub airplane: Airplane,
    pub airplane_type: AirplaneType,
}

impl AirplaneDetail {
    pub fn into_dto(self) -> AirplaneDetailDto {
        AirplaneDetailDto {
            capacity: self.airplane.capacity(),
            id: self.airplane.id,
            name: self.airplane.name,
            rows: self.airplane.rows,
            seats_in_row: self.airplane.seats_in_row,
            airplane_type: self.airplane_type.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAirplaneParams {
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type_id: i32,
}

impl CreateAirplaneParams {
    pub fn from_dto(dto: CreateAirplaneDto) -> Self {
        Self {
            name: dto.name,
            rows: dto.rows,
            seats_in_row: dto.seats_in_row,
            airplane_type_id: dto.airplane_type,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAirplaneParams {
    pub name: Option<String>,
    pub rows: Option<i32>,
    pub seats_in_row: Option<i32>,
    pub airplane_type_id: Option<i32>,
}

impl UpdateAirplaneParams {
    pub fn from_put(dto: CreateAirplaneDto) -> Self {
        Self {
            name: Some(dto.name),
            rows: Some(dto.rows),
            seats_in_row: Some(dto.seats_in_row),
            airplane_type_id: Some(dto.airplane_type),
        }
    }

    pub fn from_patch(dto: PatchAirplaneDto) -> Self {
        Self {
            name: dto.name,
            rows: dto.rows,
            seats_in_row: dto.seats_in_row,
            airplane_type_id: dto.airplane_type,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AirplaneFilter {
    pub search: Option<String>,
    pub airplane_type_id: Option<i32>,
}
