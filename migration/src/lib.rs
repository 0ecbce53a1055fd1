pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_refresh_token_table;
mod m20260102_000003_create_country_table;
mod m20260102_000004_create_city_table;
mod m20260102_000005_create_airport_table;
mod m20260102_000006_create_airplane_type_table;
mod m20260102_000007_create_airplane_table;
mod m20260102_000008_create_crew_member_table;
mod m20260103_000009_create_route_table;
mod m20260103_000010_create_flight_table;
mod m20260103_000011_create_flight_crew_table;
mod m20260104_000012_create_order_table;
mod m20260104_000013_create_ticket_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_refresh_token_table::Migration),
            Box::new(m20260102_000003_create_country_table::Migration),
            Box::new(m20260102_000004_create_city_table::Migration),
            Box::new(m20260102_000005_create_airport_table::Migration),
            Box::new(m20260102_000006_create_airplane_type_table::Migration),
            Box::new(m20260102_000007_create_airplane_table::Migration),
            Box::new(m20260102_000008_create_crew_member_table::Migration),
            Box::new(m20260103_000009_create_route_table::Migration),
            Box::new(m20260103_000010_create_flight_table::Migration),
            Box::new(m20260103_000011_create_flight_crew_table::Migration),
            Box::new(m20260104_000012_create_order_table::Migration),
            Box::new(m20260104_000013_create_ticket_table::Migration),
        ]
    }
}
