//! The ScrollStackController keeps the arranged list, the host's stack and
//! the scroll position in step.

mod dispatch;
mod operations;
mod scrolling;
mod types;

pub use types::*;
