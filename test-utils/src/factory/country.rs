//! Country factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CountryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> CountryFactory<'a> {
    /// Creates a new CountryFactory named `"Country {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Country {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::country::Model, DbErr> {
        entity::country::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_country(db: &DatabaseConnection) -> Result<entity::country::Model, DbErr> {
    CountryFactory::new(db).build().await
}
