//! Domain layer: fleet records, closed status sets and the pure view services
//! (filtering, aggregation, pagination and calendar placement).
pub mod domain;
pub mod policies;
pub mod services;
