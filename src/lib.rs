pub mod app_state;
pub mod authentication;
pub mod configuration;
pub mod domain;
pub mod repository;
pub mod request_id;
pub mod routes;
pub mod startup;
pub mod store;
pub mod telemetry;
pub mod utils;
