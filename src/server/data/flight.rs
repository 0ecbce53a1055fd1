//! Flight repository.
//!
//! Flights are always returned with their crew roster. Read models that embed route,
//! airplane and crew data are assembled from batch lookups so a listing costs a fixed
//! number of queries regardless of its length.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QuerySelect,
};
use std::collections::HashMap;

use crate::server::{
    data::{
        airplane::AirplaneRepository, crew_member::CrewMemberRepository,
        flight_crew::FlightCrewRepository, route::RouteRepository,
    },
    model::flight::{
        CreateFlightParams, CrewRole, CrewRosterMode, Flight, FlightFilter, FlightListItem,
        FlightSummary, UpdateFlightParams,
    },
    util::query::{apply_ordering, day_bounds, OrderingField},
};

pub struct FlightRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a flight together with its crew roster.
    ///
    /// Callers run this inside a transaction so a failing roster insert leaves no flight.
    pub async fn create(&self, params: CreateFlightParams) -> Result<Flight, DbErr> {
        let entity = entity::flight::ActiveModel {
            route_id: ActiveValue::Set(params.route_id),
            airplane_id: ActiveValue::Set(params.airplane_id),
            departure_time: ActiveValue::Set(params.departure_time),
            arrival_time: ActiveValue::Set(params.arrival_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let crew_repo = FlightCrewRepository::new(self.db);
        crew_repo.merge(entity.id, &params.crew).await?;
        let crew = crew_repo.get_for_flight(entity.id).await?;

        Ok(Flight::from_entity(entity, crew))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Flight>, DbErr> {
        let Some(entity) = entity::prelude::Flight::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let crew = FlightCrewRepository::new(self.db)
            .get_for_flight(entity.id)
            .await?;

        Ok(Some(Flight::from_entity(entity, crew)))
    }

    /// Ids of the flights flown by an airplane.
    pub async fn ids_for_airplane(&self, airplane_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Flight::find()
            .select_only()
            .column(entity::flight::Column::Id)
            .filter(entity::flight::Column::AirplaneId.eq(airplane_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Flight rows keyed by id, without crew.
    pub async fn get_entities_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::flight::Model>, DbErr> {
        let entities = entity::prelude::Flight::find()
            .filter(entity::flight::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| (e.id, e)).collect())
    }

    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Flight>, DbErr> {
        let entities = self.get_entities_by_ids(ids).await?;
        let flights = self.with_crew(entities.into_values().collect()).await?;

        Ok(flights.into_iter().map(|f| (f.id, f)).collect())
    }

    pub async fn get_all(
        &self,
        filter: &FlightFilter,
        ordering: &[OrderingField],
    ) -> Result<Vec<Flight>, DbErr> {
        let routes = RouteRepository::new(self.db);
        let mut query = entity::prelude::Flight::find();

        if let Some(search) = &filter.search {
            let route_ids = routes.ids_matching_search(search).await?;
            let airplane_ids = AirplaneRepository::new(self.db)
                .ids_matching_name(search)
                .await?;
            query = query.filter(
                Condition::any()
                    .add(entity::flight::Column::RouteId.is_in(route_ids))
                    .add(entity::flight::Column::AirplaneId.is_in(airplane_ids)),
            );
        }
        if let Some(route_id) = filter.route_id {
            query = query.filter(entity::flight::Column::RouteId.eq(route_id));
        }
        if let Some(airplane_id) = filter.airplane_id {
            query = query.filter(entity::flight::Column::AirplaneId.eq(airplane_id));
        }
        if let Some(date) = filter.departure_date {
            let (start, end) = day_bounds(date);
            query = query
                .filter(entity::flight::Column::DepartureTime.gte(start))
                .filter(entity::flight::Column::DepartureTime.lt(end));
        }
        if let Some(date) = filter.arrival_date {
            let (start, end) = day_bounds(date);
            query = query
                .filter(entity::flight::Column::ArrivalTime.gte(start))
                .filter(entity::flight::Column::ArrivalTime.lt(end));
        }
        if !filter.endpoints.is_empty() {
            let route_ids = routes.ids_matching_endpoints(&filter.endpoints).await?;
            query = query.filter(entity::flight::Column::RouteId.is_in(route_ids));
        }

        let query = apply_ordering(
            query,
            ordering,
            |field| match field {
                "departure_time" => Some(entity::flight::Column::DepartureTime),
                "arrival_time" => Some(entity::flight::Column::ArrivalTime),
                "id" => Some(entity::flight::Column::Id),
                _ => None,
            },
            entity::flight::Column::Id,
        );

        let entities = query.all(self.db).await?;

        self.with_crew(entities).await
    }

    /// Applies flight changes. A `Some` crew is applied according to `mode`.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateFlightParams,
        mode: CrewRosterMode,
    ) -> Result<Option<Flight>, DbErr> {
        let Some(existing) = entity::prelude::Flight::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::flight::ActiveModel = existing.into();
        if let Some(route_id) = params.route_id {
            active.route_id = ActiveValue::Set(route_id);
        }
        if let Some(airplane_id) = params.airplane_id {
            active.airplane_id = ActiveValue::Set(airplane_id);
        }
        if let Some(departure_time) = params.departure_time {
            active.departure_time = ActiveValue::Set(departure_time);
        }
        if let Some(arrival_time) = params.arrival_time {
            active.arrival_time = ActiveValue::Set(arrival_time);
        }
        let entity = active.update(self.db).await?;

        let crew_repo = FlightCrewRepository::new(self.db);
        if let Some(crew) = params.crew {
            match mode {
                CrewRosterMode::Replace => crew_repo.replace(id, &crew).await?,
                CrewRosterMode::Merge => crew_repo.merge(id, &crew).await?,
            }
        }
        let crew = crew_repo.get_for_flight(id).await?;

        Ok(Some(Flight::from_entity(entity, crew)))
    }

    /// Deletes a flight; its roster and booked tickets go with it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Flight::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_crew(&self, entities: Vec<entity::flight::Model>) -> Result<Vec<Flight>, DbErr> {
        let ids = entities.iter().map(|e| e.id).collect();
        let mut rosters = FlightCrewRepository::new(self.db)
            .get_for_flights(ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| {
                let crew = rosters.remove(&e.id).unwrap_or_default();
                Flight::from_entity(e, crew)
            })
            .collect())
    }

    /// Builds list items: route list item, airplane name and crew full names.
    pub async fn list_items(&self, flights: Vec<Flight>) -> Result<Vec<FlightListItem>, DbErr> {
        let route_repo = RouteRepository::new(self.db);
        let route_ids = flights.iter().map(|f| f.route_id).collect();
        let routes = route_repo.get_by_ids(route_ids).await?;
        let route_items: HashMap<i32, _> = route_repo
            .list_items(routes.into_values().collect())
            .await?
            .into_iter()
            .map(|item| (item.id, item))
            .collect();

        let airplane_ids = flights.iter().map(|f| f.airplane_id).collect();
        let airplanes = AirplaneRepository::new(self.db)
            .get_by_ids(airplane_ids)
            .await?;

        let crew_ids = flights
            .iter()
            .flat_map(|f| f.crew.iter().map(|c| c.crew_member_id))
            .collect();
        let members = CrewMemberRepository::new(self.db)
            .get_by_ids(crew_ids)
            .await?;

        flights
            .into_iter()
            .map(|flight| {
                let route = route_items
                    .get(&flight.route_id)
                    .cloned()
                    .ok_or_else(|| missing("Route", flight.route_id, flight.id))?;
                let airplane = airplanes
                    .get(&flight.airplane_id)
                    .ok_or_else(|| missing("Airplane", flight.airplane_id, flight.id))?;
                let crew = flight
                    .crew
                    .iter()
                    .map(|c| {
                        members
                            .get(&c.crew_member_id)
                            .map(|m| (m.full_name(), c.role))
                            .ok_or_else(|| missing("Crew member", c.crew_member_id, flight.id))
                    })
                    .collect::<Result<Vec<(String, CrewRole)>, DbErr>>()?;

                Ok(FlightListItem {
                    id: flight.id,
                    route,
                    airplane_name: airplane.name.clone(),
                    crew,
                    departure_time: flight.departure_time,
                    arrival_time: flight.arrival_time,
                })
            })
            .collect()
    }

    /// Builds summaries: route detail, airplane detail and crew members.
    pub async fn summaries(&self, flights: Vec<Flight>) -> Result<Vec<FlightSummary>, DbErr> {
        let route_repo = RouteRepository::new(self.db);
        let route_ids = flights.iter().map(|f| f.route_id).collect();
        let routes = route_repo.get_by_ids(route_ids).await?;
        let route_details: HashMap<i32, _> = route_repo
            .details(routes.into_values().collect())
            .await?
            .into_iter()
            .map(|detail| (detail.id, detail))
            .collect();

        let airplane_repo = AirplaneRepository::new(self.db);
        let airplane_ids = flights.iter().map(|f| f.airplane_id).collect();
        let airplanes = airplane_repo.get_by_ids(airplane_ids).await?;
        let airplane_details: HashMap<i32, _> = airplane_repo
            .details(airplanes.into_values().collect())
            .await?
            .into_iter()
            .map(|detail| (detail.airplane.id, detail))
            .collect();

        let crew_ids = flights
            .iter()
            .flat_map(|f| f.crew.iter().map(|c| c.crew_member_id))
            .collect();
        let members = CrewMemberRepository::new(self.db)
            .get_by_ids(crew_ids)
            .await?;

        flights
            .into_iter()
            .map(|flight| {
                let route = route_details
                    .get(&flight.route_id)
                    .cloned()
                    .ok_or_else(|| missing("Route", flight.route_id, flight.id))?;
                let airplane = airplane_details
                    .get(&flight.airplane_id)
                    .cloned()
                    .ok_or_else(|| missing("Airplane", flight.airplane_id, flight.id))?;
                let crew = flight
                    .crew
                    .iter()
                    .map(|c| {
                        members
                            .get(&c.crew_member_id)
                            .cloned()
                            .map(|m| (m, c.role))
                            .ok_or_else(|| missing("Crew member", c.crew_member_id, flight.id))
                    })
                    .collect::<Result<Vec<_>, DbErr>>()?;

                Ok(FlightSummary {
                    id: flight.id,
                    route,
                    airplane,
                    crew,
                    departure_time: flight.departure_time,
                    arrival_time: flight.arrival_time,
                })
            })
            .collect()
    }
}

fn missing(what: &str, id: i32, flight_id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("{} {} of flight {} not found", what, id, flight_id))
}
