//! Capabilities the controller consumes from the host UI framework.
//!
//! The controller never draws, measures or animates anything itself. It
//! keeps the arranged list and tells the host what changed through these
//! traits; the host calls back into
//! [`ScrollStackController::layout_completed`](crate::ScrollStackController::layout_completed)
//! after each layout pass and
//! [`ScrollStackController::animation_completed`](crate::ScrollStackController::animation_completed)
//! once per animation ticket.

pub mod headless;

use scrollstack_common::{Axis, Color, PanelId, Point, Rect, Size};

use crate::animation::{AnimationParams, AnimationTicket, Transition};
use crate::item::{ArrangedItem, Visibility};

pub use headless::HeadlessHost;

/// A node whose frame the scroll coordinator may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewNode {
    /// The panel's own view.
    Panel(PanelId),
    /// The inset wrapper around the panel's view.
    Wrapper(PanelId),
}

/// Lifecycle ownership of panels.
pub trait ParentContext {
    fn attach_child(&mut self, panel: PanelId);
    fn detach_child(&mut self, panel: PanelId);
    fn is_child(&self, panel: PanelId) -> bool;
}

/// The stacking container.
pub trait StackSurface {
    /// Add `item`'s top-level view at `index`. A wrapped item brings its
    /// wrapper, with the panel's view pinned inside by the item's insets.
    fn insert_arranged(&mut self, index: usize, item: &ArrangedItem);
    /// Take `item`'s top-level view out of the stack and unparent it; a
    /// wrapper is removed together with the panel view inside it.
    fn remove_arranged(&mut self, index: usize, item: &ArrangedItem);
    fn arranged_count(&self) -> usize;
    /// Apply a visibility immediately, without animating.
    fn set_visibility(&mut self, panel: PanelId, visibility: Visibility);
    fn set_axis(&mut self, axis: Axis);
    fn set_spacing(&mut self, spacing: f64);
    fn set_separator_color(&mut self, color: Color);
    fn set_border(&mut self, color: Color, width: f64);
}

/// The scroll container around the stack.
pub trait ScrollSurface {
    fn content_offset(&self) -> Point;
    fn set_content_offset(&mut self, offset: Point);
    fn content_size(&self) -> Size;
    fn viewport_size(&self) -> Size;
    /// Frame of `node` in content coordinates, once it has been laid out.
    fn frame(&self, node: ViewNode) -> Option<Rect>;
}

/// The animation engine.
pub trait Animator {
    /// Move to `transition`'s end state, animated with `params`. The host
    /// must report back for `ticket` exactly once, saying whether the
    /// animation ran to completion.
    fn animate(
        &mut self,
        ticket: AnimationTicket,
        transition: &Transition,
        params: &AnimationParams,
    );
}

/// Everything a [`ScrollStackController`](crate::ScrollStackController) needs.
pub trait StackHost: ParentContext + StackSurface + ScrollSurface + Animator {}

impl<T: ParentContext + StackSurface + ScrollSurface + Animator> StackHost for T {}
