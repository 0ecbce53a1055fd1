use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};
use std::cmp::Ordering;

use crate::server::{
    data::airplane_type::AirplaneTypeRepository,
    model::airplane::{
        Airplane, AirplaneDetail, AirplaneFilter, CreateAirplaneParams, UpdateAirplaneParams,
    },
    util::query::{apply_ordering, OrderingField},
};

pub struct AirplaneRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirplaneRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAirplaneParams) -> Result<Airplane, DbErr> {
        let entity = entity::airplane::ActiveModel {
            name: ActiveValue::Set(params.name),
            rows: ActiveValue::Set(params.rows),
            seats_in_row: ActiveValue::Set(params.seats_in_row),
            airplane_type_id: ActiveValue::Set(params.airplane_type_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Airplane::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Airplane>, DbErr> {
        let entity = entity::prelude::Airplane::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Airplane::from_entity))
    }

    pub async fn get_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<std::collections::HashMap<i32, Airplane>, DbErr> {
        let entities = entity::prelude::Airplane::find()
            .filter(entity::airplane::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, Airplane::from_entity(e)))
            .collect())
    }

    /// Lists airplanes.
    ///
    /// `search` matches the airplane name or its type's name. Capacity is not a column,
    /// so an ordering that mentions it is applied in memory over the whole result.
    pub async fn get_all(
        &self,
        filter: &AirplaneFilter,
        ordering: &[OrderingField],
    ) -> Result<Vec<Airplane>, DbErr> {
        let mut query = entity::prelude::Airplane::find();
        if let Some(search) = &filter.search {
            let type_ids = AirplaneTypeRepository::new(self.db)
                .ids_matching_name(search)
                .await?;
            query = query.filter(
                Condition::any()
                    .add(entity::airplane::Column::Name.contains(search))
                    .add(entity::airplane::Column::AirplaneTypeId.is_in(type_ids)),
            );
        }
        if let Some(type_id) = filter.airplane_type_id {
            query = query.filter(entity::airplane::Column::AirplaneTypeId.eq(type_id));
        }

        let sort_in_memory = ordering.iter().any(|f| f.field == "capacity");
        let sql_ordering: &[OrderingField] = if sort_in_memory { &[] } else { ordering };
        let query = apply_ordering(
            query,
            sql_ordering,
            |field| match field {
                "name" => Some(entity::airplane::Column::Name),
                "rows" => Some(entity::airplane::Column::Rows),
                "seats_in_row" => Some(entity::airplane::Column::SeatsInRow),
                "id" => Some(entity::airplane::Column::Id),
                _ => None,
            },
            entity::airplane::Column::Id,
        );

        let mut airplanes: Vec<Airplane> = query
            .all(self.db)
            .await?
            .into_iter()
            .map(Airplane::from_entity)
            .collect();

        if sort_in_memory {
            airplanes.sort_by(|a, b| compare_airplanes(a, b, ordering));
        }

        Ok(airplanes)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateAirplaneParams,
    ) -> Result<Option<Airplane>, DbErr> {
        let Some(existing) = entity::prelude::Airplane::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::airplane::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(rows) = params.rows {
            active.rows = ActiveValue::Set(rows);
        }
        if let Some(seats_in_row) = params.seats_in_row {
            active.seats_in_row = ActiveValue::Set(seats_in_row);
        }
        if let Some(type_id) = params.airplane_type_id {
            active.airplane_type_id = ActiveValue::Set(type_id);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Airplane::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Airplane::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn ids_matching_name(&self, term: &str) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::Airplane::find()
            .filter(entity::airplane::Column::Name.contains(term))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| e.id).collect())
    }

    /// Attaches each airplane's type.
    pub async fn details(&self, airplanes: Vec<Airplane>) -> Result<Vec<AirplaneDetail>, DbErr> {
        let type_ids = airplanes.iter().map(|a| a.airplane_type_id).collect();
        let types = AirplaneTypeRepository::new(self.db)
            .get_by_ids(type_ids)
            .await?;

        airplanes
            .into_iter()
            .map(|airplane| {
                let airplane_type =
                    types
                        .get(&airplane.airplane_type_id)
                        .cloned()
                        .ok_or_else(|| {
                            DbErr::RecordNotFound(format!(
                                "Airplane type {} of airplane {} not found",
                                airplane.airplane_type_id, airplane.id
                            ))
                        })?;
                Ok(AirplaneDetail {
                    airplane,
                    airplane_type,
                })
            })
            .collect()
    }
}

/// Compares two airplanes field by field, falling back to id.
fn compare_airplanes(a: &Airplane, b: &Airplane, ordering: &[OrderingField]) -> Ordering {
    ordering
        .iter()
        .map(|field| {
            let ord = match field.field.as_str() {
                "name" => a.name.cmp(&b.name),
                "rows" => a.rows.cmp(&b.rows),
                "seats_in_row" => a.seats_in_row.cmp(&b.seats_in_row),
                "capacity" => a.capacity().cmp(&b.capacity()),
                "id" => a.id.cmp(&b.id),
                _ => Ordering::Equal,
            };
            if field.descending {
                ord.reverse()
            } else {
                ord
            }
        })
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or_else(|| a.id.cmp(&b.id))
}
