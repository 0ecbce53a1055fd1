//! SeaORM entity definitions for the airport booking schema.

pub mod prelude;

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
