//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into
//! DTOs at the controller boundary. Read models come in list-item and detail variants
//! that mirror how much related data an endpoint embeds.

pub mod airplane;
pub mod airport;
pub mod city;
pub mod country;
pub mod crew_member;
pub mod flight;
pub mod order;
pub mod route;
pub mod user;
