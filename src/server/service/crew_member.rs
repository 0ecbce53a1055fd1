use sea_orm::DatabaseConnection;

use crate::server::{
    data::crew_member::CrewMemberRepository,
    error::{validation::ValidationErrors, AppError},
    model::crew_member::{
        CreateCrewMemberParams, CrewMember, CrewMemberFilter, UpdateCrewMemberParams,
    },
    util::query::OrderingField,
};

pub struct CrewMemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CrewMemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCrewMemberParams) -> Result<CrewMember, AppError> {
        let mut errors = ValidationErrors::new();
        errors.check_name("first_name", &params.first_name);
        errors.check_name("last_name", &params.last_name);
        errors.into_result()?;

        Ok(CrewMemberRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(
        &self,
        filter: CrewMemberFilter,
        ordering: Vec<OrderingField>,
    ) -> Result<Vec<CrewMember>, AppError> {
        Ok(CrewMemberRepository::new(self.db)
            .get_all(&filter, &ordering)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CrewMember, AppError> {
        CrewMemberRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateCrewMemberParams,
    ) -> Result<CrewMember, AppError> {
        let repo = CrewMemberRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        let mut errors = ValidationErrors::new();
        if let Some(first_name) = &params.first_name {
            errors.check_name("first_name", first_name);
        }
        if let Some(last_name) = &params.last_name {
            errors.check_name("last_name", last_name);
        }
        errors.into_result()?;

        repo.update(id, params).await?.ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CrewMemberRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Crew member {} not found", id))
}
