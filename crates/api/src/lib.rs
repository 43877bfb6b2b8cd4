//! HTTP API crate: axum handlers, routing, and error mapping.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
