//! Airplane service.
//!
//! Airplanes are always read with their type embedded. Capacity is derived from the
//! seat layout on every read, so it follows layout changes without being stored. A
//! layout can never shrink below a seat that is already booked on one of its flights.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        airplane::AirplaneRepository, airplane_type::AirplaneTypeRepository,
        flight::FlightRepository, ticket::TicketRepository,
    },
    error::{validation::ValidationErrors, AppError},
    model::airplane::{
        Airplane, AirplaneDetail, AirplaneFilter, CreateAirplaneParams, UpdateAirplaneParams,
    },
    util::query::OrderingField,
};

pub struct AirplaneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirplaneService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAirplaneParams) -> Result<Airplane, AppError> {
        let mut errors = ValidationErrors::new();
        errors.check_name("name", &params.name);
        errors.check_positive("rows", params.rows);
        errors.check_positive("seats_in_row", params.seats_in_row);
        errors.into_result()?;

        self.ensure_type(params.airplane_type_id).await?;

        Ok(AirplaneRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(
        &self,
        filter: AirplaneFilter,
        ordering: Vec<OrderingField>,
    ) -> Result<Vec<AirplaneDetail>, AppError> {
        let repo = AirplaneRepository::new(self.db);
        let airplanes = repo.get_all(&filter, &ordering).await?;

        Ok(repo.details(airplanes).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<AirplaneDetail, AppError> {
        let repo = AirplaneRepository::new(self.db);
        let airplane = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        repo.details(vec![airplane])
            .await?
            .pop()
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateAirplaneParams,
    ) -> Result<Airplane, AppError> {
        let repo = AirplaneRepository::new(self.db);
        let existing = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        let mut errors = ValidationErrors::new();
        if let Some(name) = &params.name {
            errors.check_name("name", name);
        }
        if let Some(rows) = params.rows {
            errors.check_positive("rows", rows);
        }
        if let Some(seats_in_row) = params.seats_in_row {
            errors.check_positive("seats_in_row", seats_in_row);
        }
        errors.into_result()?;

        if params.rows.is_some() || params.seats_in_row.is_some() {
            self.ensure_booked_seats_fit(
                id,
                params.rows.unwrap_or(existing.rows),
                params.seats_in_row.unwrap_or(existing.seats_in_row),
            )
            .await?;
        }

        if let Some(type_id) = params.airplane_type_id {
            self.ensure_type(type_id).await?;
        }

        repo.update(id, params).await?.ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AirplaneRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn ensure_booked_seats_fit(
        &self,
        id: i32,
        rows: i32,
        seats_in_row: i32,
    ) -> Result<(), AppError> {
        let flight_ids = FlightRepository::new(self.db).ids_for_airplane(id).await?;
        let Some((max_row, max_seat)) = TicketRepository::new(self.db)
            .booked_extent(flight_ids)
            .await?
        else {
            return Ok(());
        };

        let mut errors = ValidationErrors::new();
        if rows < max_row {
            errors.add(
                "rows",
                format!("Row {} is already booked on a flight of this airplane", max_row),
            );
        }
        if seats_in_row < max_seat {
            errors.add(
                "seats_in_row",
                format!("Seat {} is already booked on a flight of this airplane", max_seat),
            );
        }
        if !errors.is_empty() {
            tracing::info!(
                "Rejected layout {}x{} for airplane {}: booked seats reach row {}, seat {}",
                rows,
                seats_in_row,
                id,
                max_row,
                max_seat
            );
        }

        errors.into_result()
    }

    async fn ensure_type(&self, type_id: i32) -> Result<(), AppError> {
        match AirplaneTypeRepository::new(self.db).get_by_id(type_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!(
                "Airplane type {} not found",
                type_id
            ))),
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Airplane {} not found", id))
}
