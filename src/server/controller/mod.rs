//! HTTP request handlers.
//!
//! Each handler resolves the caller through `AuthGuard`, converts the request DTO into
//! service parameters, calls the service and converts the result back into a DTO.

pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod city;
pub mod country;
pub mod crew_member;
pub mod flight;
pub mod order;
pub mod route;
pub mod user;

#[cfg(test)]
mod test;
