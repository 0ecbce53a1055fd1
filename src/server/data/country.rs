use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use std::collections::HashMap;

use crate::server::{
    model::country::{Country, CountryFilter, CreateCountryParams, UpdateCountryParams},
    util::query::{apply_ordering, OrderingField},
};

pub struct CountryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CountryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCountryParams) -> Result<Country, DbErr> {
        let entity = entity::country::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Country::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Country>, DbErr> {
        let entity = entity::prelude::Country::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Country::from_entity))
    }

    /// Countries keyed by id. Ids without a row are absent from the map.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Country>, DbErr> {
        let entities = entity::prelude::Country::find()
            .filter(entity::country::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, Country::from_entity(e)))
            .collect())
    }

    pub async fn get_all(
        &self,
        filter: &CountryFilter,
        ordering: &[OrderingField],
    ) -> Result<Vec<Country>, DbErr> {
        let mut query = entity::prelude::Country::find();
        if let Some(search) = &filter.search {
            query = query.filter(entity::country::Column::Name.contains(search));
        }

        let query = apply_ordering(
            query,
            ordering,
            |field| match field {
                "name" => Some(entity::country::Column::Name),
                "id" => Some(entity::country::Column::Id),
                _ => None,
            },
            entity::country::Column::Id,
        );

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Country::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateCountryParams,
    ) -> Result<Option<Country>, DbErr> {
        let Some(existing) = entity::prelude::Country::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::country::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Country::from_entity(entity)))
    }

    /// Deletes a country; its cities and their airports go with it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Country::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether `name` is used by a country other than `exclude_id`.
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Country::find().filter(entity::country::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::country::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
