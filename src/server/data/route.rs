use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};
use std::collections::HashMap;

use crate::server::{
    data::airport::AirportRepository,
    model::{
        airport::AirportDetail,
        route::{
            CreateRouteParams, EndpointFilter, Route, RouteDetail, RouteFilter, RouteListItem,
            UpdateRouteParams,
        },
    },
    util::query::{apply_ordering, OrderingField},
};

pub struct RouteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RouteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRouteParams) -> Result<Route, DbErr> {
        let entity = entity::route::ActiveModel {
            source_id: ActiveValue::Set(params.source_id),
            destination_id: ActiveValue::Set(params.destination_id),
            distance: ActiveValue::Set(params.distance),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Route::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Route>, DbErr> {
        let entity = entity::prelude::Route::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Route::from_entity))
    }

    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Route>, DbErr> {
        let entities = entity::prelude::Route::find()
            .filter(entity::route::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, Route::from_entity(e)))
            .collect())
    }

    pub async fn get_all(
        &self,
        filter: &RouteFilter,
        ordering: &[OrderingField],
    ) -> Result<Vec<Route>, DbErr> {
        let mut query = entity::prelude::Route::find();
        if let Some(search) = &filter.search {
            query = query.filter(self.search_condition(search).await?);
        }
        if !filter.endpoints.is_empty() {
            query = query.filter(self.endpoint_condition(&filter.endpoints).await?);
        }

        let query = apply_ordering(
            query,
            ordering,
            |field| match field {
                "distance" => Some(entity::route::Column::Distance),
                "id" => Some(entity::route::Column::Id),
                _ => None,
            },
            entity::route::Column::Id,
        );

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Route::from_entity).collect())
    }

    pub async fn update(&self, id: i32, params: UpdateRouteParams) -> Result<Option<Route>, DbErr> {
        let Some(existing) = entity::prelude::Route::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::route::ActiveModel = existing.into();
        if let Some(source_id) = params.source_id {
            active.source_id = ActiveValue::Set(source_id);
        }
        if let Some(destination_id) = params.destination_id {
            active.destination_id = ActiveValue::Set(destination_id);
        }
        if let Some(distance) = params.distance {
            active.distance = ActiveValue::Set(distance);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Route::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Route::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Ids of routes whose source or destination airport name contains `term`.
    pub async fn ids_matching_search(&self, term: &str) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::Route::find()
            .filter(self.search_condition(term).await?)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| e.id).collect())
    }

    /// Ids of routes matching every set field of an endpoint filter.
    pub async fn ids_matching_endpoints(&self, filter: &EndpointFilter) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::Route::find()
            .filter(self.endpoint_condition(filter).await?)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| e.id).collect())
    }

    async fn search_condition(&self, term: &str) -> Result<Condition, DbErr> {
        let airport_ids = AirportRepository::new(self.db)
            .ids_matching_name(term)
            .await?;

        Ok(Condition::any()
            .add(entity::route::Column::SourceId.is_in(airport_ids.clone()))
            .add(entity::route::Column::DestinationId.is_in(airport_ids)))
    }

    /// Resolves city and country filters to airport id sets and combines every set
    /// field with AND.
    async fn endpoint_condition(&self, filter: &EndpointFilter) -> Result<Condition, DbErr> {
        let airports = AirportRepository::new(self.db);
        let source = entity::route::Column::SourceId;
        let destination = entity::route::Column::DestinationId;
        let mut condition = Condition::all();

        if let Some(id) = filter.source_airport {
            condition = condition.add(source.eq(id));
        }
        if let Some(id) = filter.destination_airport {
            condition = condition.add(destination.eq(id));
        }
        if let Some(id) = filter.source_city {
            condition = condition.add(source.is_in(airports.ids_in_city(id).await?));
        }
        if let Some(id) = filter.destination_city {
            condition = condition.add(destination.is_in(airports.ids_in_city(id).await?));
        }
        if let Some(id) = filter.source_country {
            condition = condition.add(source.is_in(airports.ids_in_country(id).await?));
        }
        if let Some(id) = filter.destination_country {
            condition = condition.add(destination.is_in(airports.ids_in_country(id).await?));
        }

        Ok(condition)
    }

    /// Loads airport details for both endpoints of every route, keyed by airport id.
    async fn airport_details(&self, routes: &[Route]) -> Result<HashMap<i32, AirportDetail>, DbErr> {
        let airports = AirportRepository::new(self.db);
        let ids = routes
            .iter()
            .flat_map(|r| [r.source_id, r.destination_id])
            .collect();
        let found = airports.get_by_ids(ids).await?;
        let details = airports.details(found.into_values().collect()).await?;

        Ok(details
            .into_iter()
            .map(|detail| (detail.airport.id, detail))
            .collect())
    }

    pub async fn details(&self, routes: Vec<Route>) -> Result<Vec<RouteDetail>, DbErr> {
        let airports = self.airport_details(&routes).await?;
        let lookup = |route_id: i32, airport_id: i32| {
            airports.get(&airport_id).cloned().ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Airport {} of route {} not found",
                    airport_id, route_id
                ))
            })
        };

        routes
            .into_iter()
            .map(|route| {
                Ok(RouteDetail {
                    id: route.id,
                    source: lookup(route.id, route.source_id)?,
                    destination: lookup(route.id, route.destination_id)?,
                    distance: route.distance,
                })
            })
            .collect()
    }

    pub async fn list_items(&self, routes: Vec<Route>) -> Result<Vec<RouteListItem>, DbErr> {
        let details = self.details(routes).await?;

        Ok(details
            .iter()
            .map(|detail| RouteListItem {
                id: detail.id,
                source: (&detail.source).into(),
                destination: (&detail.destination).into(),
                distance: detail.distance,
            })
            .collect())
    }
}
