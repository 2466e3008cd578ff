//! JSON snapshot of a settled stack.

use scrollstack_common::{Axis, PanelId, Point, Rect, Size};
use scrollstack_panels::host::ScrollSurface;
use scrollstack_panels::{HeadlessHost, ScrollStackController, ViewNode};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PanelReport {
    pub panel: PanelId,
    pub title: Option<String>,
    pub index: usize,
    pub wrapped: bool,
    pub hidden: bool,
    /// Frame of the top-level item (the wrapper for wrapped panels).
    pub frame: Option<Rect>,
}

#[derive(Debug, Serialize)]
pub struct StackReport {
    pub stack: String,
    pub axis: Axis,
    /// Hex border color, `None` when the border is clear or zero-width.
    pub border: Option<String>,
    pub separator: Option<String>,
    pub viewport: Size,
    pub content_size: Size,
    pub content_offset: Point,
    pub layout_passes: usize,
    pub pending_scroll: Option<PanelId>,
    pub panels: Vec<PanelReport>,
}

impl StackReport {
    pub fn capture(controller: &ScrollStackController<HeadlessHost>) -> Self {
        let host = controller.host();
        let panels = controller
            .registry()
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let panel = entry.panel();
                let node = if entry.item.is_wrapped() {
                    ViewNode::Wrapper(panel)
                } else {
                    ViewNode::Panel(panel)
                };
                PanelReport {
                    panel,
                    title: host.title(panel).map(str::to_owned),
                    index,
                    wrapped: entry.item.is_wrapped(),
                    hidden: entry.is_hidden(),
                    frame: host.frame(node),
                }
            })
            .collect();

        let appearance = controller.appearance();
        let border = (!appearance.border_color.is_clear() && appearance.border_width > 0.0)
            .then(|| appearance.border_color.to_hex());
        let separator = (!appearance.separator_color.is_clear())
            .then(|| appearance.separator_color.to_hex());

        Self {
            stack: controller.id().short().to_owned(),
            axis: appearance.axis,
            border,
            separator,
            viewport: host.viewport_size(),
            content_size: host.content_size(),
            content_offset: host.content_offset(),
            layout_passes: host.layout_passes(),
            pending_scroll: controller.pending_scroll(),
            panels,
        }
    }
}
