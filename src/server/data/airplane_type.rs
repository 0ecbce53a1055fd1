use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use std::collections::HashMap;

use crate::server::{
    model::airplane::{
        AirplaneType, AirplaneTypeFilter, CreateAirplaneTypeParams, UpdateAirplaneTypeParams,
    },
    util::query::{apply_ordering, OrderingField},
};

pub struct AirplaneTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirplaneTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAirplaneTypeParams) -> Result<AirplaneType, DbErr> {
        let entity = entity::airplane_type::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AirplaneType::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AirplaneType>, DbErr> {
        let entity = entity::prelude::AirplaneType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(AirplaneType::from_entity))
    }

    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, AirplaneType>, DbErr> {
        let entities = entity::prelude::AirplaneType::find()
            .filter(entity::airplane_type::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, AirplaneType::from_entity(e)))
            .collect())
    }

    pub async fn get_all(
        &self,
        filter: &AirplaneTypeFilter,
        ordering: &[OrderingField],
    ) -> Result<Vec<AirplaneType>, DbErr> {
        let mut query = entity::prelude::AirplaneType::find();
        if let Some(search) = &filter.search {
            query = query.filter(entity::airplane_type::Column::Name.contains(search));
        }

        let query = apply_ordering(
            query,
            ordering,
            |field| match field {
                "name" => Some(entity::airplane_type::Column::Name),
                "id" => Some(entity::airplane_type::Column::Id),
                _ => None,
            },
            entity::airplane_type::Column::Id,
        );

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(AirplaneType::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateAirplaneTypeParams,
    ) -> Result<Option<AirplaneType>, DbErr> {
        let Some(existing) = entity::prelude::AirplaneType::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::airplane_type::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(AirplaneType::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AirplaneType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::AirplaneType::find()
            .filter(entity::airplane_type::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::airplane_type::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Ids of airplane types whose name contains `term`.
    pub async fn ids_matching_name(&self, term: &str) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::AirplaneType::find()
            .filter(entity::airplane_type::Column::Name.contains(term))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| e.id).collect())
    }
}
