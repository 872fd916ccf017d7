//! # Application Layer
//!
//! Store and launcher interfaces, use cases, and report rendering.

pub mod interfaces;
pub mod reporter;
pub mod use_cases;

pub use interfaces::*;
pub use reporter::*;
pub use use_cases::*;
