//! Scroll request state.

use std::fmt;

use scrollstack_common::{PanelId, Point};

use crate::animation::Callback;

/// A scroll-to request waiting for a usable layout.
pub struct PendingScroll {
    pub panel: PanelId,
    /// How many layout signals this request has already waited through.
    pub attempts: u32,
    pub(crate) on_complete: Option<Callback>,
}

impl PendingScroll {
    pub fn new(panel: PanelId, on_complete: Option<Callback>) -> Self {
        Self {
            panel,
            attempts: 0,
            on_complete,
        }
    }
}

impl fmt::Debug for PendingScroll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingScroll")
            .field("panel", &self.panel)
            .field("attempts", &self.attempts)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}

/// Outcome of evaluating a scroll target against the current layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollResolution {
    /// Offset taken from the panel's own frame.
    Direct(Point),
    /// Offset taken from the wrapper holding the panel.
    ViaContainer(Point),
    /// No usable layout or no such panel yet.
    Deferred,
}

impl ScrollResolution {
    pub fn offset(&self) -> Option<Point> {
        match *self {
            ScrollResolution::Direct(p) | ScrollResolution::ViaContainer(p) => Some(p),
            ScrollResolution::Deferred => None,
        }
    }
}

/// Owns the single pending scroll slot.
#[derive(Debug, Default)]
pub struct ScrollCoordinator {
    pub(super) pending: Option<PendingScroll>,
}
