//! Airport repository.
//!
//! Besides CRUD this provides the id lookups that route and flight filters resolve
//! city and country ids through.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use std::collections::HashMap;

use crate::server::{
    data::city::CityRepository,
    model::airport::{
        Airport, AirportDetail, AirportFilter, AirportListItem, CreateAirportParams,
        UpdateAirportParams,
    },
    util::query::{apply_ordering, OrderingField},
};

pub struct AirportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAirportParams) -> Result<Airport, DbErr> {
        let entity = entity::airport::ActiveModel {
            name: ActiveValue::Set(params.name),
            closest_big_city_id: ActiveValue::Set(params.closest_big_city_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Airport::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Airport>, DbErr> {
        let entity = entity::prelude::Airport::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Airport::from_entity))
    }

    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Airport>, DbErr> {
        let entities = entity::prelude::Airport::find()
            .filter(entity::airport::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, Airport::from_entity(e)))
            .collect())
    }

    pub async fn get_all(
        &self,
        filter: &AirportFilter,
        ordering: &[OrderingField],
    ) -> Result<Vec<Airport>, DbErr> {
        let mut query = entity::prelude::Airport::find();
        if let Some(search) = &filter.search {
            query = query.filter(entity::airport::Column::Name.contains(search));
        }
        if let Some(city_id) = filter.city_id {
            query = query.filter(entity::airport::Column::ClosestBigCityId.eq(city_id));
        }
        if let Some(country_id) = filter.country_id {
            let city_ids = CityRepository::new(self.db)
                .ids_in_country(country_id)
                .await?;
            query = query.filter(entity::airport::Column::ClosestBigCityId.is_in(city_ids));
        }

        let query = apply_ordering(
            query,
            ordering,
            |field| match field {
                "name" => Some(entity::airport::Column::Name),
                "id" => Some(entity::airport::Column::Id),
                _ => None,
            },
            entity::airport::Column::Id,
        );

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Airport::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateAirportParams,
    ) -> Result<Option<Airport>, DbErr> {
        let Some(existing) = entity::prelude::Airport::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::airport::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(city_id) = params.closest_big_city_id {
            active.closest_big_city_id = ActiveValue::Set(city_id);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Airport::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Airport::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn ids_in_city(&self, city_id: i32) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::Airport::find()
            .filter(entity::airport::Column::ClosestBigCityId.eq(city_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| e.id).collect())
    }

    pub async fn ids_in_country(&self, country_id: i32) -> Result<Vec<i32>, DbErr> {
        let city_ids = CityRepository::new(self.db)
            .ids_in_country(country_id)
            .await?;
        let entities = entity::prelude::Airport::find()
            .filter(entity::airport::Column::ClosestBigCityId.is_in(city_ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| e.id).collect())
    }

    pub async fn ids_matching_name(&self, term: &str) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::Airport::find()
            .filter(entity::airport::Column::Name.contains(term))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| e.id).collect())
    }

    /// Attaches each airport's city and country.
    ///
    /// # Returns
    /// - `Ok(Vec<AirportDetail>)` - Details in the same order as `airports`
    /// - `Err(DbErr::RecordNotFound)` - An airport references a missing city
    pub async fn details(&self, airports: Vec<Airport>) -> Result<Vec<AirportDetail>, DbErr> {
        let cities = CityRepository::new(self.db);
        let city_ids = airports.iter().map(|a| a.closest_big_city_id).collect();
        let city_map = cities.get_by_ids(city_ids).await?;
        let city_details: HashMap<i32, _> = cities
            .details(city_map.into_values().collect())
            .await?
            .into_iter()
            .map(|detail| (detail.city.id, detail))
            .collect();

        airports
            .into_iter()
            .map(|airport| {
                let city = city_details
                    .get(&airport.closest_big_city_id)
                    .cloned()
                    .ok_or_else(|| {
                        DbErr::RecordNotFound(format!(
                            "City {} of airport {} not found",
                            airport.closest_big_city_id, airport.id
                        ))
                    })?;
                Ok(AirportDetail { airport, city })
            })
            .collect()
    }

    pub async fn list_items(&self, airports: Vec<Airport>) -> Result<Vec<AirportListItem>, DbErr> {
        let details = self.details(airports).await?;

        Ok(details.iter().map(AirportListItem::from).collect())
    }
}
