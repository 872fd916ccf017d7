mod aggregator;

pub use aggregator::*;
