//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They are responsible for:
//!
//! - **Validation**: Collecting field errors before anything is written
//! - **Orchestration**: Checking referenced resources and coordinating repositories
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Flight and booking writes that span several tables

pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod auth;
pub mod city;
pub mod country;
pub mod crew_member;
pub mod flight;
pub mod order;
pub mod route;
pub mod user;
