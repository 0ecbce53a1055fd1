use sea_orm::entity::prelude::*;

/// Role-tagged assignment of a crew member to a flight.
///
/// `role` holds one of `CAPTAIN`, `FIRST_OFFICER`, `FLIGHT_ATTENDANT`,
/// `PURSER` or `DISPATCHER`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_crew")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub flight_id: i32,
    pub crew_member_id: i32,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::FlightId",
        to = "super::flight::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Flight,
    #[sea_orm(
        belongs_to = "super::crew_member::Entity",
        from = "Column::CrewMemberId",
        to = "super::crew_member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CrewMember,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl Related<super::crew_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CrewMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
