use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod staff_exists;
mod update;
mod username_taken;
