use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{airplane_type::AirplaneTypeRepository, is_unique_violation},
    error::{validation::ValidationErrors, AppError},
    model::airplane::{
        AirplaneType, AirplaneTypeFilter, CreateAirplaneTypeParams, UpdateAirplaneTypeParams,
    },
    util::query::OrderingField,
};

const NAME_TAKEN: &str = "airplane type with this name already exists.";

pub struct AirplaneTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirplaneTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateAirplaneTypeParams,
    ) -> Result<AirplaneType, AppError> {
        let mut errors = ValidationErrors::new();
        errors.check_name("name", &params.name);
        errors.into_result()?;

        let repo = AirplaneTypeRepository::new(self.db);
        if repo.name_taken(&params.name, None).await? {
            return Err(ValidationErrors::single("name", NAME_TAKEN).into());
        }

        repo.create(params).await.map_err(name_conflict)
    }

    pub async fn get_all(
        &self,
        filter: AirplaneTypeFilter,
        ordering: Vec<OrderingField>,
    ) -> Result<Vec<AirplaneType>, AppError> {
        Ok(AirplaneTypeRepository::new(self.db)
            .get_all(&filter, &ordering)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<AirplaneType, AppError> {
        AirplaneTypeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateAirplaneTypeParams,
    ) -> Result<AirplaneType, AppError> {
        let repo = AirplaneTypeRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        if let Some(name) = &params.name {
            let mut errors = ValidationErrors::new();
            errors.check_name("name", name);
            errors.into_result()?;

            if repo.name_taken(name, Some(id)).await? {
                return Err(ValidationErrors::single("name", NAME_TAKEN).into());
            }
        }

        repo.update(id, params)
            .await
            .map_err(name_conflict)?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AirplaneTypeRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Airplane type {} not found", id))
}

fn name_conflict(err: DbErr) -> AppError {
    if is_unique_violation(&err) {
        ValidationErrors::single("name", NAME_TAKEN).into()
    } else {
        err.into()
    }
}
