//! Gazette API server library.
//!
//! Exposes the core building blocks (config, state, error handling, the
//! article resource, views, routes) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod params;
pub mod query;
pub mod resource;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
