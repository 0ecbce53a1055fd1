use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub route_id: i32,
    pub airplane_id: i32,
    pub departure_time: DateTimeUtc,
    pub arrival_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::route::Entity",
        from = "Column::RouteId",
        to = "super::route::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Route,
    #[sea_orm(
        belongs_to = "super::airplane::Entity",
        from = "Column::AirplaneId",
        to = "super::airplane::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Airplane,
    #[sea_orm(has_many = "super::flight_crew::Entity")]
    FlightCrew,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::route::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Route.def()
    }
}

impl Related<super::airplane::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airplane.def()
    }
}

impl Related<super::flight_crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightCrew.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
