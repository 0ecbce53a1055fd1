use crate::model::crew_member::{CreateCrewMemberDto, CrewMemberDto, PatchCrewMemberDto};

#[derive(Debug, Clone, PartialEq)]
pub struct CrewMember {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl CrewMember {
    pub fn from_entity(entity: entity::crew_member::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> CrewMemberDto {
        CrewMemberDto {
            full_name: self.full_name(),
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCrewMemberParams {
    pub first_name: String,
    pub last_name: String,
}

impl CreateCrewMemberParams {
    pub fn from_dto(dto: CreateCrewMemberDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCrewMemberParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateCrewMemberParams {
    pub fn from_put(dto: CreateCrewMemberDto) -> Self {
        Self {
            first_name: Some(dto.first_name),
            last_name: Some(dto.last_name),
        }
    }

    pub fn from_patch(dto: PatchCrewMemberDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CrewMemberFilter {
    pub search: Option<String>,
}
