//! Site builder API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, media
//! storage) so integration tests and the binary entrypoint can both use them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod media;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
