//! Where a panel lands in the arranged list.

use scrollstack_common::{EdgeInsets, PanelId};
use serde::{Deserialize, Serialize};

/// A position in the arranged list, resolved to a concrete index only at
/// insertion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertionLocation {
    Start,
    #[default]
    End,
    Index(usize),
    Before(PanelId),
    After(PanelId),
}

impl InsertionLocation {
    /// Resolve against a list of `count` items, where `index_of` looks up a
    /// reference panel. Always lands in `[0, count]`; a missing reference
    /// panel appends.
    pub fn resolve(&self, count: usize, index_of: impl Fn(PanelId) -> Option<usize>) -> usize {
        match *self {
            InsertionLocation::Start => 0,
            InsertionLocation::End => count,
            InsertionLocation::Index(n) => n.min(count),
            InsertionLocation::After(panel) => index_of(panel).map_or(count, |i| i + 1),
            InsertionLocation::Before(panel) => index_of(panel).unwrap_or(count),
        }
    }
}

/// Insertion parameters for `show` when the panel is not yet arranged.
/// `insets: Some(_)` wraps the panel, even when every edge is zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    #[serde(default)]
    pub location: InsertionLocation,
    #[serde(default)]
    pub insets: Option<EdgeInsets>,
}

impl Placement {
    pub fn new(location: InsertionLocation, insets: Option<EdgeInsets>) -> Self {
        Self { location, insets }
    }

    /// Insert bare at `location`.
    pub fn at(location: InsertionLocation) -> Self {
        Self::new(location, None)
    }

    /// Insert wrapped with `insets` at `location`.
    pub fn wrapped(location: InsertionLocation, insets: EdgeInsets) -> Self {
        Self::new(location, Some(insets))
    }
}
