//! Animation requests handed to the host and their completion bookkeeping.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use scrollstack_common::{PanelId, Point};
use scrollstack_config::schema::{FadeCurveConfig, ScrollCurveConfig, SpringCurve};

use crate::item::Visibility;

/// A callback run after an operation finishes.
pub type Callback = Box<dyn FnOnce()>;

/// Identifies one animation request. The host reports completion with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationTicket(pub u64);

/// The end state an animation moves towards. Transitions name panels, never
/// indices, so structural changes during an animation do not retarget it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Visibility { panel: PanelId, to: Visibility },
    ContentOffset { from: Point, to: Point },
}

/// Spring parameters for one animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    pub duration: Duration,
    pub delay: Duration,
    pub damping: f64,
    pub initial_velocity: f64,
}

impl AnimationParams {
    /// The stock fade curve.
    pub fn visibility() -> Self {
        Self::from_curve(&FadeCurveConfig::default().curve())
    }

    /// The stock scroll curve.
    pub fn scroll() -> Self {
        Self::from_curve(&ScrollCurveConfig::default().curve())
    }

    /// Negative or non-finite durations collapse to zero.
    pub fn from_curve(curve: &SpringCurve) -> Self {
        let secs = |s: f64| Duration::try_from_secs_f64(s).unwrap_or(Duration::ZERO);
        Self {
            duration: secs(curve.duration),
            delay: secs(curve.delay),
            damping: curve.damping,
            initial_velocity: curve.initial_velocity,
        }
    }
}

/// Run `first` then `second` as one callback.
pub(crate) fn chain(first: Option<Callback>, second: Option<Callback>) -> Option<Callback> {
    match (first, second) {
        (Some(first), Some(second)) => Some(Box::new(move || {
            first();
            second();
        })),
        (first, None) => first,
        (None, second) => second,
    }
}

/// What happens once an animation reports back.
pub(crate) enum Continuation {
    Visibility {
        on_complete: Option<Callback>,
    },
    Removal {
        panel: PanelId,
        on_complete: Option<Callback>,
    },
    Scroll {
        panel: PanelId,
        offset: Point,
        on_complete: Option<Callback>,
    },
}

impl fmt::Debug for Continuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Continuation::Visibility { .. } => f.write_str("Visibility"),
            Continuation::Removal { panel, .. } => write!(f, "Removal({panel})"),
            Continuation::Scroll { panel, offset, .. } => {
                write!(f, "Scroll({panel}, {}, {})", offset.x, offset.y)
            }
        }
    }
}

/// Continuations waiting on in-flight animations.
#[derive(Debug, Default)]
pub(crate) struct Continuations {
    pending: HashMap<AnimationTicket, Continuation>,
    next_ticket: u64,
}

impl Continuations {
    /// Park `continuation` under a fresh ticket.
    pub(crate) fn park(&mut self, continuation: Continuation) -> AnimationTicket {
        let ticket = AnimationTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.insert(ticket, continuation);
        ticket
    }

    pub(crate) fn get_mut(&mut self, ticket: AnimationTicket) -> Option<&mut Continuation> {
        self.pending.get_mut(&ticket)
    }

    pub(crate) fn take(&mut self, ticket: AnimationTicket) -> Option<Continuation> {
        self.pending.remove(&ticket)
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    /// Drop everything still waiting. Returns how many were dropped.
    pub(crate) fn clear(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }
}
