// Cell tower monitoring dashboard - derivations and HTTP delivery
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
