// Application layer - Use cases and derivations
pub mod aggregation;
pub mod dashboard_service;
pub mod fleet_repository;
pub mod formatting;
pub mod table;
pub mod views;
