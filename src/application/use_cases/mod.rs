mod launch_annotator;
mod list_annotated;
mod lookup_term;
mod search_by_term;

pub use launch_annotator::*;
pub use list_annotated::*;
pub use lookup_term::*;
pub use search_by_term::*;
