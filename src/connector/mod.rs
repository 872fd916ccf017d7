//! # Connector Layer
//!
//! Implementations of the application interfaces:
//! - DuckDB and in-memory repository / vocabulary stores
//! - `nodemon` launcher for the web annotation interface
//! - Composition root, router and controllers for the CLI

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
