//! Panel registry: the ordered arranged list and controller-to-position
//! lookups.

mod operations;
mod types;

pub use types::*;
