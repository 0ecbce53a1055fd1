use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::{BTreeSet, HashMap};

use crate::server::model::flight::CrewAssignment;

/// Repository for the `(flight, crew_member, role)` roster rows.
pub struct FlightCrewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightCrewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Rosters of several flights keyed by flight id, in insertion order.
    ///
    /// Flights without crew are absent from the map.
    pub async fn get_for_flights(
        &self,
        flight_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<CrewAssignment>>, DbErr> {
        let entities = entity::prelude::FlightCrew::find()
            .filter(entity::flight_crew::Column::FlightId.is_in(flight_ids))
            .order_by_asc(entity::flight_crew::Column::Id)
            .all(self.db)
            .await?;

        let mut rosters: HashMap<i32, Vec<CrewAssignment>> = HashMap::new();
        for entity in &entities {
            rosters
                .entry(entity.flight_id)
                .or_default()
                .push(CrewAssignment::from_entity(entity)?);
        }

        Ok(rosters)
    }

    pub async fn get_for_flight(&self, flight_id: i32) -> Result<Vec<CrewAssignment>, DbErr> {
        let mut rosters = self.get_for_flights(vec![flight_id]).await?;

        Ok(rosters.remove(&flight_id).unwrap_or_default())
    }

    /// Adds assignments that are not on the roster yet. Repeated entries are inserted once.
    pub async fn merge(&self, flight_id: i32, crew: &[CrewAssignment]) -> Result<(), DbErr> {
        let unique: BTreeSet<CrewAssignment> = crew.iter().copied().collect();

        for assignment in unique {
            let exists = entity::prelude::FlightCrew::find()
                .filter(entity::flight_crew::Column::FlightId.eq(flight_id))
                .filter(entity::flight_crew::Column::CrewMemberId.eq(assignment.crew_member_id))
                .filter(entity::flight_crew::Column::Role.eq(assignment.role.as_str()))
                .count(self.db)
                .await?
                > 0;
            if exists {
                continue;
            }

            entity::flight_crew::ActiveModel {
                flight_id: ActiveValue::Set(flight_id),
                crew_member_id: ActiveValue::Set(assignment.crew_member_id),
                role: ActiveValue::Set(assignment.role.as_str().to_string()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Makes the roster exactly `crew`.
    pub async fn replace(&self, flight_id: i32, crew: &[CrewAssignment]) -> Result<(), DbErr> {
        entity::prelude::FlightCrew::delete_many()
            .filter(entity::flight_crew::Column::FlightId.eq(flight_id))
            .exec(self.db)
            .await?;

        self.merge(flight_id, crew).await
    }
}
