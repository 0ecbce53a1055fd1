use sea_orm::entity::prelude::*;

/// Airplane with a rectangular seat layout of `rows` x `seats_in_row`.
///
/// Capacity is not a column; it is derived from the layout by the domain model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "airplane")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airplane_type::Entity",
        from = "Column::AirplaneTypeId",
        to = "super::airplane_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AirplaneType,
    #[sea_orm(has_many = "super::flight::Entity")]
    Flight,
}

impl Related<super::airplane_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AirplaneType.def()
    }
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
