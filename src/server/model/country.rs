use crate::model::country::{CountryDto, CreateCountryDto, PatchCountryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub id: i32,
    pub name: String,
}

impl Country {
    pub fn from_entity(entity: entity::country::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CountryDto {
        CountryDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCountryParams {
    pub name: String,
}

impl CreateCountryParams {
    pub fn from_dto(dto: CreateCountryDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCountryParams {
    pub name: Option<String>,
}

impl UpdateCountryParams {
    pub fn from_put(dto: CreateCountryDto) -> Self {
        Self {
            name: Some(dto.name),
        }
    }

    pub fn from_patch(dto: PatchCountryDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CountryFilter {
    pub search: Option<String>,
}
