use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` or one of the grouped helpers, then call
/// `build()` to create an in-memory SQLite database with that schema.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Country, City};
///
/// let test = TestBuilder::new()
///     .with_table(Country)
///     .with_table(City)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after all tables exist.
    indexes: Vec<IndexCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys should be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and refresh token tables.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(RefreshToken)
    }

    /// Adds country, city and airport tables.
    pub fn with_geography_tables(self) -> Self {
        self.with_table(Country)
            .with_table(City)
            .with_table(Airport)
    }

    /// Adds every table the flight catalog depends on.
    ///
    /// Includes geography, airplane types, airplanes, crew, routes, flights and
    /// flight crew assignments along with the unique roster index.
    pub fn with_catalog_tables(mut self) -> Self {
        self.indexes.push(
            Index::create()
                .unique()
                .name("idx_flight_crew_unique")
                .table(FlightCrew)
                .col(entity::flight_crew::Column::FlightId)
                .col(entity::flight_crew::Column::CrewMemberId)
                .col(entity::flight_crew::Column::Role)
                .to_owned(),
        );

        self.with_geography_tables()
            .with_table(AirplaneType)
            .with_table(Airplane)
            .with_table(CrewMember)
            .with_table(Route)
            .with_table(Flight)
            .with_table(FlightCrew)
    }

    /// Adds every table in the schema, including orders and tickets.
    ///
    /// The unique `(flight_id, row, seat)` ticket index is created as well, so seat
    /// conflicts behave exactly like they do against the migrated database.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_booking_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_booking_tables(mut self) -> Self {
        self.indexes.push(
            Index::create()
                .unique()
                .name("idx_ticket_flight_row_seat")
                .table(Ticket)
                .col(entity::ticket::Column::FlightId)
                .col(entity::ticket::Column::Row)
                .col(entity::ticket::Column::Seat)
                .to_owned(),
        );

        self.with_user_tables()
            .with_catalog_tables()
            .with_table(Order)
            .with_table(Ticket)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
