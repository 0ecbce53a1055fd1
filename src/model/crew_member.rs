use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CrewMemberDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCrewMemberDto {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct PatchCrewMemberDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
