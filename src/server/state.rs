//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through Axum's
//! state extraction. All fields are cheap to clone: the database connection is a pool
//! handle and the remaining fields are small configuration values.

use sea_orm::DatabaseConnection;

use crate::server::{model::flight::CrewRosterMode, service::auth::jwt::JwtConfig};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signing secret and lifetimes for access and refresh tokens.
    pub jwt: JwtConfig,

    /// How flight updates treat the crew roster in their payload.
    pub crew_roster_update: CrewRosterMode,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtConfig, crew_roster_update: CrewRosterMode) -> Self {
        Self {
            db,
            jwt,
            crew_roster_update,
        }
    }
}
