use sea_orm::DatabaseConnection;

use crate::server::{
    data::{airport::AirportRepository, route::RouteRepository},
    error::{validation::ValidationErrors, AppError},
    model::route::{
        CreateRouteParams, Route, RouteDetail, RouteFilter, RouteListItem, UpdateRouteParams,
    },
    util::query::OrderingField,
};

pub struct RouteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RouteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRouteParams) -> Result<Route, AppError> {
        check_distance(params.distance)?;
        self.ensure_airport(params.source_id).await?;
        self.ensure_airport(params.destination_id).await?;

        Ok(RouteRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(
        &self,
        filter: RouteFilter,
        ordering: Vec<OrderingField>,
    ) -> Result<Vec<RouteListItem>, AppError> {
        let repo = RouteRepository::new(self.db);
        let routes = repo.get_all(&filter, &ordering).await?;

        Ok(repo.list_items(routes).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<RouteDetail, AppError> {
        let repo = RouteRepository::new(self.db);
        let route = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        repo.details(vec![route])
            .await?
            .pop()
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: i32, params: UpdateRouteParams) -> Result<Route, AppError> {
        let repo = RouteRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        if let Some(distance) = params.distance {
            check_distance(distance)?;
        }
        if let Some(source_id) = params.source_id {
            self.ensure_airport(source_id).await?;
        }
        if let Some(destination_id) = params.destination_id {
            self.ensure_airport(destination_id).await?;
        }

        repo.update(id, params).await?.ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !RouteRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn ensure_airport(&self, airport_id: i32) -> Result<(), AppError> {
        match AirportRepository::new(self.db).get_by_id(airport_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!(
                "Airport {} not found",
                airport_id
            ))),
        }
    }
}

fn check_distance(distance: i32) -> Result<(), AppError> {
    if distance < 0 {
        return Err(ValidationErrors::single(
            "distance",
            "Ensure this value is greater than or equal to 0.",
        )
        .into());
    }

    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Route {} not found", id))
}
