//! Airplane factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for airplanes.
///
/// Defaults to a 10 x 6 layout and creates an airplane type on build when none
/// was given.
pub struct AirplaneFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    rows: i32,
    seats_in_row: i32,
    airplane_type_id: Option<i32>,
}

impl<'a> AirplaneFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Airplane {}", next_id()),
            rows: 10,
            seats_in_row: 6,
            airplane_type_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn rows(mut self, rows: i32) -> Self {
        self.rows = rows;
        self
    }

    pub fn seats_in_row(mut self, seats_in_row: i32) -> Self {
        self.seats_in_row = seats_in_row;
        self
    }

    pub fn airplane_type_id(mut self, airplane_type_id: i32) -> Self {
        self.airplane_type_id = Some(airplane_type_id);
        self
    }

    pub async fn build(self) -> Result<entity::airplane::Model, DbErr> {
        let airplane_type_id = match self.airplane_type_id {
            Some(id) => id,
            None => {
                crate::factory::airplane_type::create_airplane_type(self.db)
                    .await?
                    .id
            }
        };

        entity::airplane::ActiveModel {
            name: ActiveValue::Set(self.name),
            rows: ActiveValue::Set(self.rows),
            seats_in_row: ActiveValue::Set(self.seats_in_row),
            airplane_type_id: ActiveValue::Set(airplane_type_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_airplane(db: &DatabaseConnection) -> Result<entity::airplane::Model, DbErr> {
    AirplaneFactory::new(db).build().await
}
