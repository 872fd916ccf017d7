mod duckdb_repository_store;
mod duckdb_vocabulary_store;
mod in_memory_stores;
mod nodemon_launcher;

pub use duckdb_repository_store::*;
pub use duckdb_vocabulary_store::*;
pub use in_memory_stores::*;
pub use nodemon_launcher::*;
