mod interface_launcher;
mod repository_store;
mod vocabulary_store;

pub use interface_launcher::*;
pub use repository_store::*;
pub use vocabulary_store::*;
