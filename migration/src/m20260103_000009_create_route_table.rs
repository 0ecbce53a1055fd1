use sea_orm_migration::{prelude::*, schema::*};

use super::m20260102_000005_create_airport_table::Airport;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Route::Table)
                    .if_not_exists()
                    .col(pk_auto(Route::Id))
                    .col(integer(Route::SourceId))
                    .col(integer(Route::DestinationId))
                    .col(integer(Route::Distance))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_route_source_id")
                            .from(Route::Table, Route::SourceId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_route_destination_id")
                            .from(Route::Table, Route::DestinationId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Route::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Route {
    Table,
    Id,
    SourceId,
    DestinationId,
    Distance,
}
