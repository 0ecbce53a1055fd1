//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::{TokenPairDto, UserDto};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// The password hash is dropped here and never leaves the data layer.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            is_staff: entity.is_staff,
            is_active: entity.is_active,
            date_joined: entity.date_joined,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            is_staff: self.is_staff,
            first_name: self.first_name,
            last_name: self.last_name,
            date_joined: self.date_joined,
        }
    }
}

/// Self-registration input with the plaintext password.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterUserParams {
    pub fn from_dto(dto: crate::model::user::RegisterUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

/// Parameters for inserting a user. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
}

/// Profile fields a user may change about themselves. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateProfileParams {
    pub fn from_put(dto: crate::model::user::UpdateUserDto) -> Self {
        Self {
            username: Some(dto.username),
            password: dto.password,
            first_name: Some(dto.first_name),
            last_name: Some(dto.last_name),
        }
    }

    pub fn from_patch(dto: crate::model::user::PatchUserDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

/// Profile changes with the password already hashed, as handed to the repository.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl TokenPair {
    pub fn into_dto(self) -> TokenPairDto {
        TokenPairDto {
            access: self.access,
            refresh: self.refresh,
        }
    }
}
