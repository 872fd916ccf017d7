mod annotated_repository;
mod annotation_summary;
mod vocabulary_term;

pub use annotated_repository::*;
pub use annotation_summary::*;
pub use vocabulary_term::*;
