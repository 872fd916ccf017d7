//! # Domain Layer
//!
//! Annotation records, vocabulary terms, derived statistics and errors.
//! This layer performs no I/O.

pub mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
