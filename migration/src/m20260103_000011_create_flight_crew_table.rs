use sea_orm_migration::{prelude::*, schema::*};

use super::m20260102_000008_create_crew_member_table::CrewMember;
use super::m20260103_000010_create_flight_table::Flight;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightCrew::Table)
                    .if_not_exists()
                    .col(pk_auto(FlightCrew::Id))
                    .col(integer(FlightCrew::FlightId))
                    .col(integer(FlightCrew::CrewMemberId))
                    .col(string(FlightCrew::Role))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_crew_flight_id")
                            .from(FlightCrew::Table, FlightCrew::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_crew_crew_member_id")
                            .from(FlightCrew::Table, FlightCrew::CrewMemberId)
                            .to(CrewMember::Table, CrewMember::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_flight_crew_unique")
                            .col(FlightCrew::FlightId)
                            .col(FlightCrew::CrewMemberId)
                            .col(FlightCrew::Role),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightCrew::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FlightCrew {
    Table,
    Id,
    FlightId,
    CrewMemberId,
    Role,
}
