//! Domain-level types shared across the workspace.
//!
//! This crate has no I/O: it holds the error taxonomy the repositories and
//! handlers agree on, plus the primitive type aliases used for database
//! keys and timestamps.

pub mod error;
pub mod types;

pub use error::CoreError;
