//! Offset computation and pending-slot management.

use scrollstack_common::{Axis, PanelId, Point, Rect};

use super::{PendingScroll, ScrollCoordinator, ScrollResolution};
use crate::host::{ScrollSurface, ViewNode};
use crate::item::ArrangedItem;
use crate::registry::PanelRegistry;

/// Evaluate where `panel` should scroll to right now.
pub fn resolve<S: ScrollSurface + ?Sized>(
    registry: &PanelRegistry,
    surface: &S,
    axis: Axis,
    panel: PanelId,
) -> ScrollResolution {
    let max = surface.content_size().main(axis) - surface.viewport_size().main(axis);
    if max.is_nan() || max <= 0.0 {
        return ScrollResolution::Deferred;
    }

    let Some(entry) = registry.entry(panel) else {
        return ScrollResolution::Deferred;
    };
    match entry.item {
        ArrangedItem::Direct(_) => surface
            .frame(ViewNode::Panel(panel))
            .map_or(ScrollResolution::Deferred, |frame| {
                ScrollResolution::Direct(offset_for(frame, max, axis))
            }),
        ArrangedItem::Wrapped { .. } => surface
            .frame(ViewNode::Wrapper(panel))
            .map_or(ScrollResolution::Deferred, |frame| {
                ScrollResolution::ViaContainer(offset_for(frame, max, axis))
            }),
    }
}

/// Clamp the frame's leading edge into `[0, max]` along `axis`; the cross
/// coordinate is the frame's own.
pub fn offset_for(frame: Rect, max: f64, axis: Axis) -> Point {
    let clamp = |v: f64| v.min(max).max(0.0);
    match axis {
        Axis::Vertical => Point::new(frame.x, clamp(frame.y)),
        Axis::Horizontal => Point::new(clamp(frame.x), frame.y),
    }
}

impl ScrollCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park `request` until the next layout signal. Returns the request it
    /// replaced, if any.
    pub fn defer(&mut self, request: PendingScroll) -> Option<PendingScroll> {
        self.pending.replace(request)
    }

    /// Empty the slot for re-evaluation.
    pub fn take_pending(&mut self) -> Option<PendingScroll> {
        self.pending.take()
    }

    /// Drop the pending request without running its callback.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn pending_panel(&self) -> Option<PanelId> {
        self.pending.as_ref().map(|p| p.panel)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
