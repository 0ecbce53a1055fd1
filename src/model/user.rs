use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub first_name: String,
    pub last_name: String,
    pub date_joined: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterUserDto {
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Full profile replacement. `email` and `is_staff` are read-only and ignored.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateUserDto {
    pub username: String,
    pub password: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct PatchUserDto {
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TokenRequestDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RefreshRequestDto {
    pub refresh: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TokenPairDto {
    pub access: String,
    pub refresh: String,
}
