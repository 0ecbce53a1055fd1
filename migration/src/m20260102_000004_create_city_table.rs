use sea_orm_migration::{prelude::*, schema::*};

use super::m20260102_000003_create_country_table::Country;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(pk_auto(City::Id))
                    .col(string(City::Name))
                    .col(integer(City::CountryId))
                    .col(boolean(City::IsCapital).default(false))
                    .col(string(City::Timezone).default("UTC"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_city_country_id")
                            .from(City::Table, City::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum City {
    Table,
    Id,
    Name,
    CountryId,
    IsCapital,
    Timezone,
}
