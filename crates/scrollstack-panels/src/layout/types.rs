//! Layout engine types and configuration.

use scrollstack_common::{Axis, EdgeInsets, PanelId, Rect, Size};
use serde::Serialize;

/// Configuration for the engine that stacks items along an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    pub axis: Axis,
    /// Gap between consecutive visible items.
    pub spacing: f64,
    /// Border inset on every edge of the stack.
    pub border_width: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            spacing: 0.0,
            border_width: 0.0,
        }
    }
}

/// One top-level item as the engine sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutItem {
    pub panel: PanelId,
    /// The panel's intrinsic size. Only the main-axis extent is used; the
    /// cross axis always stretches.
    pub size: Size,
    pub insets: Option<EdgeInsets>,
    pub hidden: bool,
}

/// Computed frames for one item, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemFrame {
    pub panel: PanelId,
    /// The top-level frame: the wrapper when wrapped, else the panel itself.
    pub outer: Rect,
    /// The panel view's frame. Equal to `outer` for bare items.
    pub inner: Rect,
}

/// Result of one layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StackLayout {
    pub frames: Vec<ItemFrame>,
    pub content_size: Size,
}

impl StackLayout {
    pub fn frame(&self, panel: PanelId) -> Option<&ItemFrame> {
        self.frames.iter().find(|f| f.panel == panel)
    }
}
