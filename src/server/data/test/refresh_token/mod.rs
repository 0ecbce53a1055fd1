use crate::server::data::refresh_token::RefreshTokenRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_active_by_hash;
mod revoke;
