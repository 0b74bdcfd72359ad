pub mod advisor;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod serializers;
pub mod session;
pub mod state;
pub mod views;
