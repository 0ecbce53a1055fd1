//! Route factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for routes. Missing endpoints are created as fresh airports on build.
pub struct RouteFactory<'a> {
    db: &'a DatabaseConnection,
    source_id: Option<i32>,
    destination_id: Option<i32>,
    distance: i32,
}

impl<'a> RouteFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            source_id: None,
            destination_id: None,
            distance: 1000,
        }
    }

    pub fn source_id(mut self, source_id: i32) -> Self {
        self.source_id = Some(source_id);
        self
    }

    pub fn destination_id(mut self, destination_id: i32) -> Self {
        self.destination_id = Some(destination_id);
        self
    }

    pub fn distance(mut self, distance: i32) -> Self {
        self.distance = distance;
        self
    }

    pub async fn build(self) -> Result<entity::route::Model, DbErr> {
        let source_id = match self.source_id {
            Some(id) => id,
            None => crate::factory::airport::create_airport(self.db).await?.id,
        };
        let destination_id = match self.destination_id {
            Some(id) => id,
            None => crate::factory::airport::create_airport(self.db).await?.id,
        };

        entity::route::ActiveModel {
            source_id: ActiveValue::Set(source_id),
            destination_id: ActiveValue::Set(destination_id),
            distance: ActiveValue::Set(self.distance),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_route(db: &DatabaseConnection) -> Result<entity::route::Model, DbErr> {
    RouteFactory::new(db).build().await
}
