use sea_orm::DatabaseConnection;

use crate::server::{
    data::{airport::AirportRepository, city::CityRepository},
    error::{validation::ValidationErrors, AppError},
    model::airport::{
        Airport, AirportDetail, AirportFilter, AirportListItem, CreateAirportParams,
        UpdateAirportParams,
    },
    util::query::OrderingField,
};

pub struct AirportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAirportParams) -> Result<Airport, AppError> {
        let mut errors = ValidationErrors::new();
        errors.check_name("name", &params.name);
        errors.into_result()?;

        self.ensure_city(params.closest_big_city_id).await?;

        Ok(AirportRepository::new(self.db).create(params).await?)
    }

    /// Lists airports with city and country names.
    pub async fn get_all(
        &self,
        filter: AirportFilter,
        ordering: Vec<OrderingField>,
    ) -> Result<Vec<AirportListItem>, AppError> {
        let repo = AirportRepository::new(self.db);
        let airports = repo.get_all(&filter, &ordering).await?;

        Ok(repo.list_items(airports).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<AirportDetail, AppError> {
        let repo = AirportRepository::new(self.db);
        let airport = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        repo.details(vec![airport])
            .await?
            .pop()
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: i32, params: UpdateAirportParams) -> Result<Airport, AppError> {
        let repo = AirportRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        if let Some(name) = &params.name {
            let mut errors = ValidationErrors::new();
            errors.check_name("name", name);
            errors.into_result()?;
        }
        if let Some(city_id) = params.closest_big_city_id {
            self.ensure_city(city_id).await?;
        }

        repo.update(id, params).await?.ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AirportRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn ensure_city(&self, city_id: i32) -> Result<(), AppError> {
        match CityRepository::new(self.db).get_by_id(city_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("City {} not found", city_id))),
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Airport {} not found", id))
}
