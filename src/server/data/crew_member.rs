use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};
use std::collections::HashMap;

use crate::server::{
    model::crew_member::{
        CreateCrewMemberParams, CrewMember, CrewMemberFilter, UpdateCrewMemberParams,
    },
    util::query::{apply_ordering, OrderingField},
};

pub struct CrewMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CrewMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCrewMemberParams) -> Result<CrewMember, DbErr> {
        let entity = entity::crew_member::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CrewMember::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CrewMember>, DbErr> {
        let entity = entity::prelude::CrewMember::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(CrewMember::from_entity))
    }

    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, CrewMember>, DbErr> {
        let entities = entity::prelude::CrewMember::find()
            .filter(entity::crew_member::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, CrewMember::from_entity(e)))
            .collect())
    }

    pub async fn get_all(
        &self,
        filter: &CrewMemberFilter,
        ordering: &[OrderingField],
    ) -> Result<Vec<CrewMember>, DbErr> {
        let mut query = entity::prelude::CrewMember::find();
        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(entity::crew_member::Column::FirstName.contains(search))
                    .add(entity::crew_member::Column::LastName.contains(search)),
            );
        }

        let query = apply_ordering(
            query,
            ordering,
            |field| match field {
                "first_name" => Some(entity::crew_member::Column::FirstName),
                "last_name" => Some(entity::crew_member::Column::LastName),
                "id" => Some(entity::crew_member::Column::Id),
                _ => None,
            },
            entity::crew_member::Column::Id,
        );

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(CrewMember::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateCrewMemberParams,
    ) -> Result<Option<CrewMember>, DbErr> {
        let Some(existing) = entity::prelude::CrewMember::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::crew_member::ActiveModel = existing.into();
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(CrewMember::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CrewMember::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
