//! Wire-format DTOs shared by every API endpoint.
//!
//! Write DTOs take related resources as ids; read DTOs come in plain, list and
//! detail shapes that embed progressively more of the related data.

pub mod airplane;
pub mod airport;
pub mod api;
pub mod city;
pub mod country;
pub mod crew_member;
pub mod flight;
pub mod order;
pub mod route;
pub mod user;
