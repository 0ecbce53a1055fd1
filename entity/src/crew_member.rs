use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "crew_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight_crew::Entity")]
    FlightCrew,
}

impl Related<super::flight_crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightCrew.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
