use chrono_tz::Tz;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{city::CityRepository, country::CountryRepository},
    error::{validation::ValidationErrors, AppError},
    model::city::{City, CityDetail, CityFilter, CreateCityParams, UpdateCityParams},
    util::query::OrderingField,
};

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCityParams) -> Result<City, AppError> {
        let mut errors = ValidationErrors::new();
        errors.check_name("name", &params.name);
        check_timezone(&mut errors, &params.timezone);
        errors.into_result()?;

        self.ensure_country(params.country_id).await?;

        Ok(CityRepository::new(self.db).create(params).await?)
    }

    /// Lists cities with their country embedded.
    pub async fn get_all(
        &self,
        filter: CityFilter,
        ordering: Vec<OrderingField>,
    ) -> Result<Vec<CityDetail>, AppError> {
        let repo = CityRepository::new(self.db);
        let cities = repo.get_all(&filter, &ordering).await?;

        Ok(repo.details(cities).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CityDetail, AppError> {
        let repo = CityRepository::new(self.db);
        let city = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        repo.details(vec![city])
            .await?
            .pop()
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: i32, params: UpdateCityParams) -> Result<City, AppError> {
        let repo = CityRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        let mut errors = ValidationErrors::new();
        if let Some(name) = &params.name {
            errors.check_name("name", name);
        }
        if let Some(timezone) = &params.timezone {
            check_timezone(&mut errors, timezone);
        }
        errors.into_result()?;

        if let Some(country_id) = params.country_id {
            self.ensure_country(country_id).await?;
        }

        repo.update(id, params).await?.ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CityRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn ensure_country(&self, country_id: i32) -> Result<(), AppError> {
        if CountryRepository::new(self.db)
            .get_by_id(country_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Country {} not found",
                country_id
            )));
        }

        Ok(())
    }
}

/// Accepts IANA time zone names such as `Europe/Kyiv`.
fn check_timezone(errors: &mut ValidationErrors, timezone: &str) {
    if timezone.parse::<Tz>().is_err() {
        errors.add(
            "timezone",
            format!("\"{}\" is not a valid time zone.", timezone),
        );
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("City {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_iana_time_zones() {
        let mut errors = ValidationErrors::new();
        check_timezone(&mut errors, "Europe/Kyiv");
        check_timezone(&mut errors, "UTC");
        assert!(errors.is_empty());

        check_timezone(&mut errors, "Mars/Olympus_Mons");
        assert_eq!(errors.fields()["timezone"].len(), 1);
    }
}
