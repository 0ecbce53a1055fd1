//! Flight service.
//!
//! Flights and their crew roster are written in one transaction. How an update applies
//! a submitted roster depends on the configured `CrewRosterMode`.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        airplane::AirplaneRepository, crew_member::CrewMemberRepository,
        flight::FlightRepository, route::RouteRepository, ticket::TicketRepository,
    },
    error::{validation::ValidationErrors, AppError},
    model::{
        airplane::Airplane,
        flight::{
            CreateFlightParams, CrewAssignment, CrewRosterMode, Flight, FlightDetail,
            FlightFilter, FlightListItem, Seat, UpdateFlightParams,
        },
    },
    util::query::OrderingField,
};

pub const ARRIVAL_BEFORE_DEPARTURE: &str = "Arrival time must be after departure time.";

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
    roster_mode: CrewRosterMode,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection, roster_mode: CrewRosterMode) -> Self {
        Self { db, roster_mode }
    }

    pub async fn create(&self, params: CreateFlightParams) -> Result<Flight, AppError> {
        check_times(params.departure_time, params.arrival_time)?;
        self.ensure_route(params.route_id).await?;
        self.ensure_airplane(params.airplane_id).await?;
        self.ensure_crew(&params.crew).await?;

        let txn = self.db.begin().await?;
        let flight = FlightRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::info!(
            "Created flight {} with {} crew assignments",
            flight.id,
            flight.crew.len()
        );

        Ok(flight)
    }

    pub async fn get_all(
        &self,
        filter: FlightFilter,
        ordering: Vec<OrderingField>,
    ) -> Result<Vec<FlightListItem>, AppError> {
        let repo = FlightRepository::new(self.db);
        let flights = repo.get_all(&filter, &ordering).await?;

        Ok(repo.list_items(flights).await?)
    }

    /// Gets a flight with route, airplane, crew and its booked seats.
    pub async fn get_by_id(&self, id: i32) -> Result<FlightDetail, AppError> {
        let repo = FlightRepository::new(self.db);
        let flight = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        let summary = repo
            .summaries(vec![flight])
            .await?
            .pop()
            .ok_or_else(|| not_found(id))?;
        let seats = TicketRepository::new(self.db)
            .get_for_flight(id)
            .await?
            .into_iter()
            .map(|ticket| Seat {
                id: ticket.id,
                row: ticket.row,
                seat: ticket.seat,
            })
            .collect();

        Ok(FlightDetail { summary, seats })
    }

    /// Updates a flight.
    ///
    /// Times are validated against the stored values when only one of them changes. A
    /// submitted roster replaces or merges into the current one per the roster mode;
    /// an absent roster is left untouched.
    pub async fn update(&self, id: i32, params: UpdateFlightParams) -> Result<Flight, AppError> {
        let repo = FlightRepository::new(self.db);
        let existing = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        check_times(
            params.departure_time.unwrap_or(existing.departure_time),
            params.arrival_time.unwrap_or(existing.arrival_time),
        )?;
        if let Some(route_id) = params.route_id {
            self.ensure_route(route_id).await?;
        }
        if let Some(airplane_id) = params.airplane_id {
            let airplane = self.ensure_airplane(airplane_id).await?;
            if airplane.id != existing.airplane_id {
                self.ensure_booked_seats_fit(id, &airplane).await?;
            }
        }
        if let Some(crew) = &params.crew {
            self.ensure_crew(crew).await?;
        }

        let txn = self.db.begin().await?;
        let flight = FlightRepository::new(&txn)
            .update(id, params, self.roster_mode)
            .await?
            .ok_or_else(|| not_found(id))?;
        txn.commit().await?;

        Ok(flight)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !FlightRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn ensure_route(&self, route_id: i32) -> Result<(), AppError> {
        match RouteRepository::new(self.db).get_by_id(route_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("Route {} not found", route_id))),
        }
    }

    async fn ensure_airplane(&self, airplane_id: i32) -> Result<Airplane, AppError> {
        AirplaneRepository::new(self.db)
            .get_by_id(airplane_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Airplane {} not found", airplane_id)))
    }

    /// Rejects moving a flight to an airplane whose layout lacks an already booked seat.
    async fn ensure_booked_seats_fit(&self, id: i32, airplane: &Airplane) -> Result<(), AppError> {
        let extent = TicketRepository::new(self.db)
            .booked_extent(vec![id])
            .await?;

        match extent {
            Some((max_row, max_seat))
                if max_row > airplane.rows || max_seat > airplane.seats_in_row =>
            {
                Err(ValidationErrors::single(
                    "airplane",
                    format!(
                        "Airplane {} has {} rows of {} seats but this flight has bookings up to row {}, seat {}",
                        airplane.id, airplane.rows, airplane.seats_in_row, max_row, max_seat
                    ),
                )
                .into())
            }
            _ => Ok(()),
        }
    }

    async fn ensure_crew(&self, crew: &[CrewAssignment]) -> Result<(), AppError> {
        let ids: Vec<i32> = crew.iter().map(|c| c.crew_member_id).collect();
        let found = CrewMemberRepository::new(self.db)
            .get_by_ids(ids.clone())
            .await?;

        match ids.into_iter().find(|id| !found.contains_key(id)) {
            Some(missing) => Err(AppError::NotFound(format!(
                "Crew member {} not found",
                missing
            ))),
            None => Ok(()),
        }
    }
}

fn check_times(departure: DateTime<Utc>, arrival: DateTime<Utc>) -> Result<(), AppError> {
    if arrival <= departure {
        return Err(ValidationErrors::single("arrival_time", ARRIVAL_BEFORE_DEPARTURE).into());
    }

    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Flight {} not found", id))
}
