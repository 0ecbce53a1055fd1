//! City factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for cities. Creates a country on build when none was given.
pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    country_id: Option<i32>,
    is_capital: bool,
    timezone: String,
}

impl<'a> CityFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("City {}", next_id()),
            country_id: None,
            is_capital: false,
            timezone: "UTC".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn country_id(mut self, country_id: i32) -> Self {
        self.country_id = Some(country_id);
        self
    }

    pub fn capital(mut self, is_capital: bool) -> Self {
        self.is_capital = is_capital;
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub async fn build(self) -> Result<entity::city::Model, DbErr> {
        let country_id = match self.country_id {
            Some(id) => id,
            None => crate::factory::country::create_country(self.db).await?.id,
        };

        entity::city::ActiveModel {
            name: ActiveValue::Set(self.name),
            country_id: ActiveValue::Set(country_id),
            is_capital: ActiveValue::Set(self.is_capital),
            timezone: ActiveValue::Set(self.timezone),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_city(db: &DatabaseConnection) -> Result<entity::city::Model, DbErr> {
    CityFactory::new(db).build().await
}
