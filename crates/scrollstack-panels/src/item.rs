//! Entries of the arranged list.

use scrollstack_common::{EdgeInsets, PanelId};
use serde::{Deserialize, Serialize};

/// A top-level entry of the stack: either the panel's own view or a wrapper
/// that pads it by `insets`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrangedItem {
    Direct(PanelId),
    Wrapped { panel: PanelId, insets: EdgeInsets },
}

impl ArrangedItem {
    pub fn new(panel: PanelId, insets: Option<EdgeInsets>) -> Self {
        match insets {
            Some(insets) => ArrangedItem::Wrapped { panel, insets },
            None => ArrangedItem::Direct(panel),
        }
    }

    pub fn panel(&self) -> PanelId {
        match *self {
            ArrangedItem::Direct(panel) | ArrangedItem::Wrapped { panel, .. } => panel,
        }
    }

    pub fn insets(&self) -> Option<EdgeInsets> {
        match *self {
            ArrangedItem::Direct(_) => None,
            ArrangedItem::Wrapped { insets, .. } => Some(insets),
        }
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self, ArrangedItem::Wrapped { .. })
    }
}

/// Hidden flag plus opacity of a top-level item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Visibility {
    pub hidden: bool,
    pub alpha: f64,
}

impl Visibility {
    pub const SHOWN: Visibility = Visibility {
        hidden: false,
        alpha: 1.0,
    };

    pub const HIDDEN: Visibility = Visibility {
        hidden: true,
        alpha: 0.0,
    };

    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Self::SHOWN
        } else {
            Self::HIDDEN
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::SHOWN
    }
}

/// An item together with its current visibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrangedEntry {
    pub item: ArrangedItem,
    pub visibility: Visibility,
}

impl ArrangedEntry {
    pub fn new(item: ArrangedItem) -> Self {
        Self {
            item,
            visibility: Visibility::SHOWN,
        }
    }

    pub fn panel(&self) -> PanelId {
        self.item.panel()
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_insets_still_wrap() {
        let item = ArrangedItem::new(PanelId(1), Some(EdgeInsets::ZERO));
        assert!(item.is_wrapped());
        assert_eq!(item.insets(), Some(EdgeInsets::ZERO));
    }

    #[test]
    fn no_insets_is_direct() {
        let item = ArrangedItem::new(PanelId(1), None);
        assert_eq!(item, ArrangedItem::Direct(PanelId(1)));
        assert_eq!(item.insets(), None);
        assert_eq!(item.panel(), PanelId(1));
    }

    #[test]
    fn new_entry_is_visible() {
        let entry = ArrangedEntry::new(ArrangedItem::Direct(PanelId(4)));
        assert!(!entry.is_hidden());
        assert_eq!(entry.visibility.alpha, 1.0);
        assert_eq!(entry.panel(), PanelId(4));
    }

    #[test]
    fn visibility_from_flag() {
        assert_eq!(Visibility::from_visible(false), Visibility::HIDDEN);
        assert_eq!(Visibility::from_visible(true), Visibility::SHOWN);
    }
}
