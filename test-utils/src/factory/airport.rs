//! Airport factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for airports. Creates a city on build when none was given.
pub struct AirportFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    closest_big_city_id: Option<i32>,
}

impl<'a> AirportFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Airport {}", next_id()),
            closest_big_city_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city_id(mut self, city_id: i32) -> Self {
        self.closest_big_city_id = Some(city_id);
        self
    }

    pub async fn build(self) -> Result<entity::airport::Model, DbErr> {
        let city_id = match self.closest_big_city_id {
            Some(id) => id,
            None => crate::factory::city::create_city(self.db).await?.id,
        };

        entity::airport::ActiveModel {
            name: ActiveValue::Set(self.name),
            closest_big_city_id: ActiveValue::Set(city_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_airport(db: &DatabaseConnection) -> Result<entity::airport::Model, DbErr> {
    AirportFactory::new(db).build().await
}
