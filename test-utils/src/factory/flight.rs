//! Flight factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for flights.
///
/// Departs one day from now and arrives two hours later unless overridden. Missing
/// route and airplane are created on build.
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    route_id: Option<i32>,
    airplane_id: Option<i32>,
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
}

impl<'a> FlightFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let departure_time = Utc::now() + Duration::days(1);
        Self {
            db,
            route_id: None,
            airplane_id: None,
            departure_time,
            arrival_time: departure_time + Duration::hours(2),
        }
    }

    pub fn route_id(mut self, route_id: i32) -> Self {
        self.route_id = Some(route_id);
        self
    }

    pub fn airplane_id(mut self, airplane_id: i32) -> Self {
        self.airplane_id = Some(airplane_id);
        self
    }

    pub fn departure_time(mut self, departure_time: DateTime<Utc>) -> Self {
        self.departure_time = departure_time;
        self
    }

    pub fn arrival_time(mut self, arrival_time: DateTime<Utc>) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        let route_id = match self.route_id {
            Some(id) => id,
            None => crate::factory::route::create_route(self.db).await?.id,
        };
        let airplane_id = match self.airplane_id {
            Some(id) => id,
            None => crate::factory::airplane::create_airplane(self.db).await?.id,
        };

        entity::flight::ActiveModel {
            route_id: ActiveValue::Set(route_id),
            airplane_id: ActiveValue::Set(airplane_id),
            departure_time: ActiveValue::Set(self.departure_time),
            arrival_time: ActiveValue::Set(self.arrival_time),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_flight(db: &DatabaseConnection) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db).build().await
}

/// Assigns a crew member to a flight in the given role.
pub async fn assign_crew(
    db: &DatabaseConnection,
    flight_id: i32,
    crew_member_id: i32,
    role: impl Into<String>,
) -> Result<entity::flight_crew::Model, DbErr> {
    entity::flight_crew::ActiveModel {
        flight_id: ActiveValue::Set(flight_id),
        crew_member_id: ActiveValue::Set(crew_member_id),
        role: ActiveValue::Set(role.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_flight_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let flight = create_flight(db).await?;

        assert!(flight.arrival_time > flight.departure_time);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_crew_assignment() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let flight = create_flight(db).await?;
        let crew = crate::factory::crew_member::create_crew_member(db).await?;

        assign_crew(db, flight.id, crew.id, "CAPTAIN").await?;
        let duplicate = assign_crew(db, flight.id, crew.id, "CAPTAIN").await;

        assert!(duplicate.is_err());

        Ok(())
    }
}
