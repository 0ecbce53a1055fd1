//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults and create any missing parents,
//! so a test only spells out the fields it actually cares about.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let flight = factory::create_flight(&db).await?;
//!     let (order, ticket) = factory::helpers::create_booking(&db, user.id, flight.id, 1, 1).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let airplane = factory::airplane::AirplaneFactory::new(&db)
//!     .rows(10)
//!     .seats_in_row(6)
//!     .build()
//!     .await?;
//! ```

pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod city;
pub mod country;
pub mod crew_member;
pub mod flight;
pub mod helpers;
pub mod order;
pub mod route;
pub mod ticket;
pub mod user;

pub use airplane::create_airplane;
pub use airplane_type::create_airplane_type;
pub use airport::create_airport;
pub use city::create_city;
pub use country::create_country;
pub use crew_member::create_crew_member;
pub use flight::create_flight;
pub use order::create_order;
pub use route::create_route;
pub use ticket::create_ticket;
pub use user::{create_staff_user, create_user};
