//! Airplane type factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AirplaneTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> AirplaneTypeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Type {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::airplane_type::Model, DbErr> {
        entity::airplane_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_airplane_type(
    db: &DatabaseConnection,
) -> Result<entity::airplane_type::Model, DbErr> {
    AirplaneTypeFactory::new(db).build().await
}
