//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one aggregate each and hand back server-side
//! domain models. They are generic over `ConnectionTrait` so the same repository runs
//! against the pooled connection or inside a transaction opened by a service.

use sea_orm::{DbErr, SqlErr};

pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod city;
pub mod country;
pub mod crew_member;
pub mod flight;
pub mod flight_crew;
pub mod order;
pub mod refresh_token;
pub mod route;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;

/// Whether a database error is a unique constraint violation.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
