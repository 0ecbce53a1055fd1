//! Crew member factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CrewMemberFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
}

impl<'a> CrewMemberFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            first_name: "Crew".to_string(),
            last_name: format!("Member{}", next_id()),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub async fn build(self) -> Result<entity::crew_member::Model, DbErr> {
        entity::crew_member::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_crew_member(
    db: &DatabaseConnection,
) -> Result<entity::crew_member::Model, DbErr> {
    CrewMemberFactory::new(db).build().await
}
