use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use std::collections::HashMap;

use crate::server::{
    data::country::CountryRepository,
    model::city::{City, CityDetail, CityFilter, CreateCityParams, UpdateCityParams},
    util::query::{apply_ordering, OrderingField},
};

pub struct CityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCityParams) -> Result<City, DbErr> {
        let entity = entity::city::ActiveModel {
            name: ActiveValue::Set(params.name),
            country_id: ActiveValue::Set(params.country_id),
            is_capital: ActiveValue::Set(params.is_capital),
            timezone: ActiveValue::Set(params.timezone),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(City::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<City>, DbErr> {
        let entity = entity::prelude::City::find_by_id(id).one(self.db).await?;

        Ok(entity.map(City::from_entity))
    }

    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, City>, DbErr> {
        let entities = entity::prelude::City::find()
            .filter(entity::city::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, City::from_entity(e)))
            .collect())
    }

    pub async fn get_all(
        &self,
        filter: &CityFilter,
        ordering: &[OrderingField],
    ) -> Result<Vec<City>, DbErr> {
        let mut query = entity::prelude::City::find();
        if let Some(search) = &filter.search {
            query = query.filter(entity::city::Column::Name.contains(search));
        }
        if let Some(country_id) = filter.country_id {
            query = query.filter(entity::city::Column::CountryId.eq(country_id));
        }

        let query = apply_ordering(
            query,
            ordering,
            |field| match field {
                "name" => Some(entity::city::Column::Name),
                "id" => Some(entity::city::Column::Id),
                _ => None,
            },
            entity::city::Column::Id,
        );

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(City::from_entity).collect())
    }

    pub async fn update(&self, id: i32, params: UpdateCityParams) -> Result<Option<City>, DbErr> {
        let Some(existing) = entity::prelude::City::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::city::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(country_id) = params.country_id {
            active.country_id = ActiveValue::Set(country_id);
        }
        if let Some(is_capital) = params.is_capital {
            active.is_capital = ActiveValue::Set(is_capital);
        }
        if let Some(timezone) = params.timezone {
            active.timezone = ActiveValue::Set(timezone);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(City::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::City::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Ids of every city in a country.
    pub async fn ids_in_country(&self, country_id: i32) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::City::find()
            .filter(entity::city::Column::CountryId.eq(country_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| e.id).collect())
    }

    /// Attaches each city's country, loading all countries in one query.
    ///
    /// # Returns
    /// - `Ok(Vec<CityDetail>)` - Details in the same order as `cities`
    /// - `Err(DbErr::RecordNotFound)` - A city references a missing country
    pub async fn details(&self, cities: Vec<City>) -> Result<Vec<CityDetail>, DbErr> {
        let country_ids = cities.iter().map(|c| c.country_id).collect();
        let countries = CountryRepository::new(self.db)
            .get_by_ids(country_ids)
            .await?;

        cities
            .into_iter()
            .map(|city| {
                let country = countries.get(&city.country_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Country {} of city {} not found",
                        city.country_id, city.id
                    ))
                })?;
                Ok(CityDetail { city, country })
            })
            .collect()
    }
}
