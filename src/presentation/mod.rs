// Presentation layer - HTTP delivery of the dashboard views
pub mod app_state;
pub mod handlers;
pub mod routes;
