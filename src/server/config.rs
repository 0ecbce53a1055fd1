use std::str::FromStr;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::flight::CrewRosterMode,
    service::auth::jwt::JwtConfig,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 5;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 1;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt: JwtConfig,
    pub crew_roster_update: CrewRosterMode,

    /// Credentials of the staff account created at startup when none exists.
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// | Env Var                   | Required | Default        |
    /// |---------------------------|----------|----------------|
    /// | `DATABASE_URL`            | yes      |                |
    /// | `JWT_SECRET`              | yes      |                |
    /// | `BIND_ADDRESS`            | no       | `0.0.0.0:8000` |
    /// | `JWT_ACCESS_EXPIRY_MINS`  | no       | `5`            |
    /// | `JWT_REFRESH_EXPIRY_DAYS` | no       | `1`            |
    /// | `CREW_ROSTER_UPDATE`      | no       | `replace`      |
    /// | `ADMIN_USERNAME`          | no       |                |
    /// | `ADMIN_PASSWORD`          | no       |                |
    pub fn from_env() -> Result<Self, AppError> {
        let secret = required("JWT_SECRET")?;
        if secret.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                name: "JWT_SECRET".to_string(),
                value: secret,
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            jwt: JwtConfig {
                secret,
                access_token_expiry_mins: parsed("JWT_ACCESS_EXPIRY_MINS")?
                    .unwrap_or(DEFAULT_ACCESS_EXPIRY_MINS),
                refresh_token_expiry_days: parsed("JWT_REFRESH_EXPIRY_DAYS")?
                    .unwrap_or(DEFAULT_REFRESH_EXPIRY_DAYS),
            },
            crew_roster_update: parsed("CREW_ROSTER_UPDATE")?.unwrap_or_default(),
            admin_username: optional("ADMIN_USERNAME"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parsed<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional(name)
        .map(|value| {
            value.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
                value,
            })
        })
        .transpose()
}
