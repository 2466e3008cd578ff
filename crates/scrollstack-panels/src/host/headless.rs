//! In-memory host implementing every host trait.
//!
//! Used by the demo binary and by tests. Layout only runs when
//! [`HeadlessHost::layout`] is called, and animations jump straight to their
//! end state but stay queued until drained, so callers decide when the
//! controller hears about either.

use std::collections::{BTreeSet, HashMap};

use scrollstack_common::{Axis, Color, PanelId, Point, Rect, Size};

use super::{Animator, ParentContext, ScrollSurface, StackSurface, ViewNode};
use crate::animation::{AnimationParams, AnimationTicket, Transition};
use crate::controller::ScrollStackController;
use crate::item::{ArrangedEntry, ArrangedItem, Visibility};
use crate::layout::{LayoutEngine, LayoutItem, StackLayout};
use crate::panel::Panel;

/// Upper bound on [`ScrollStackController::settle`] rounds.
const MAX_SETTLE_ROUNDS: usize = 64;

/// An animation the host has started but not yet reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingAnimation {
    pub ticket: AnimationTicket,
    pub transition: Transition,
    pub params: AnimationParams,
}

#[derive(Debug)]
pub struct HeadlessHost {
    viewport: Size,
    engine: LayoutEngine,
    separator_color: Color,
    border_color: Color,
    /// Intrinsic sizes of registered panels.
    sizes: HashMap<PanelId, Size>,
    titles: HashMap<PanelId, String>,
    children: BTreeSet<PanelId>,
    /// Mirror of the stack's arranged subviews.
    items: Vec<ArrangedEntry>,
    last_layout: StackLayout,
    content_size: Size,
    offset: Point,
    needs_layout: bool,
    animations: Vec<PendingAnimation>,
    layout_passes: usize,
}

impl HeadlessHost {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            engine: LayoutEngine::default(),
            separator_color: Color::CLEAR,
            border_color: Color::CLEAR,
            sizes: HashMap::new(),
            titles: HashMap::new(),
            children: BTreeSet::new(),
            items: Vec::new(),
            last_layout: StackLayout::default(),
            content_size: Size::ZERO,
            offset: Point::ZERO,
            needs_layout: false,
            animations: Vec::new(),
            layout_passes: 0,
        }
    }

    /// Make a panel's size known to the host. Unregistered panels lay out
    /// with zero extent.
    pub fn register(&mut self, panel: &Panel) {
        self.sizes.insert(panel.id, panel.size);
        self.titles.insert(panel.id, panel.title.clone());
        if self.contains(panel.id) {
            self.needs_layout = true;
        }
    }

    pub fn title(&self, panel: PanelId) -> Option<&str> {
        self.titles.get(&panel).map(String::as_str)
    }

    /// Run a layout pass over the arranged items.
    pub fn layout(&mut self) -> &StackLayout {
        let items: Vec<LayoutItem> = self
            .items
            .iter()
            .map(|entry| LayoutItem {
                panel: entry.panel(),
                size: self.sizes.get(&entry.panel()).copied().unwrap_or_default(),
                insets: entry.item.insets(),
                hidden: entry.is_hidden(),
            })
            .collect();

        self.last_layout = self.engine.compute(&items, self.viewport);
        self.content_size = self.last_layout.content_size;
        self.needs_layout = false;
        self.layout_passes += 1;
        &self.last_layout
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    /// Result of the most recent layout pass.
    pub fn last_layout(&self) -> &StackLayout {
        &self.last_layout
    }

    /// Drain animations started since the last call. Each must be reported
    /// to the controller exactly once.
    pub fn take_animations(&mut self) -> Vec<PendingAnimation> {
        std::mem::take(&mut self.animations)
    }

    pub fn pending_animations(&self) -> usize {
        self.animations.len()
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.needs_layout = true;
    }

    pub fn arranged(&self) -> &[ArrangedEntry] {
        &self.items
    }

    pub fn children(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.children.iter().copied()
    }

    pub fn visibility(&self, panel: PanelId) -> Option<Visibility> {
        self.items
            .iter()
            .find(|e| e.panel() == panel)
            .map(|e| e.visibility)
    }

    pub fn axis(&self) -> Axis {
        self.engine.axis
    }

    pub fn spacing(&self) -> f64 {
        self.engine.spacing
    }

    pub fn border(&self) -> (Color, f64) {
        (self.border_color, self.engine.border_width)
    }

    pub fn separator_color(&self) -> Color {
        self.separator_color
    }

    fn contains(&self, panel: PanelId) -> bool {
        self.items.iter().any(|e| e.panel() == panel)
    }
}

impl ParentContext for HeadlessHost {
    fn attach_child(&mut self, panel: PanelId) {
        self.children.insert(panel);
    }

    fn detach_child(&mut self, panel: PanelId) {
        self.children.remove(&panel);
    }

    fn is_child(&self, panel: PanelId) -> bool {
        self.children.contains(&panel)
    }
}

impl StackSurface for HeadlessHost {
    fn insert_arranged(&mut self, index: usize, item: &ArrangedItem) {
        let index = index.min(self.items.len());
        self.items.insert(index, ArrangedEntry::new(*item));
        self.needs_layout = true;
    }

    fn remove_arranged(&mut self, index: usize, item: &ArrangedItem) {
        let position = match self.items.get(index) {
            Some(entry) if entry.item == *item => Some(index),
            _ => self.items.iter().position(|e| e.item == *item),
        };
        if let Some(position) = position {
            self.items.remove(position);
            self.needs_layout = true;
        }
    }

    fn arranged_count(&self) -> usize {
        self.items.len()
    }

    fn set_visibility(&mut self, panel: PanelId, visibility: Visibility) {
        if let Some(entry) = self.items.iter_mut().find(|e| e.panel() == panel) {
            if entry.visibility.hidden != visibility.hidden {
                self.needs_layout = true;
            }
            entry.visibility = visibility;
        }
    }

    fn set_axis(&mut self, axis: Axis) {
        self.engine.axis = axis;
        self.needs_layout = true;
    }

    fn set_spacing(&mut self, spacing: f64) {
        self.engine.spacing = spacing;
        self.needs_layout = true;
    }

    fn set_separator_color(&mut self, color: Color) {
        self.separator_color = color;
    }

    fn set_border(&mut self, color: Color, width: f64) {
        self.border_color = color;
        self.engine.border_width = width;
        self.needs_layout = true;
    }
}

impl ScrollSurface for HeadlessHost {
    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn frame(&self, node: ViewNode) -> Option<Rect> {
        let panel = match node {
            ViewNode::Panel(p) | ViewNode::Wrapper(p) => p,
        };
        let entry = self.items.iter().find(|e| e.panel() == panel)?;
        let frame = self.last_layout.frame(panel)?;
        match (node, entry.item.is_wrapped()) {
            (ViewNode::Panel(_), true) => Some(frame.inner),
            (ViewNode::Panel(_), false) | (ViewNode::Wrapper(_), true) => Some(frame.outer),
            (ViewNode::Wrapper(_), false) => None,
        }
    }
}

impl Animator for HeadlessHost {
    fn animate(
        &mut self,
        ticket: AnimationTicket,
        transition: &Transition,
        params: &AnimationParams,
    ) {
        match *transition {
            Transition::Visibility { panel, to } => self.set_visibility(panel, to),
            Transition::ContentOffset { to, .. } => self.offset = to,
        }
        self.animations.push(PendingAnimation {
            ticket,
            transition: *transition,
            params: *params,
        });
    }
}

impl ScrollStackController<HeadlessHost> {
    /// Lay out and finish animations until nothing changes. Returns the
    /// number of rounds that did work.
    pub fn settle(&mut self) -> usize {
        let mut rounds = 0;
        while rounds < MAX_SETTLE_ROUNDS {
            let mut progressed = false;
            if self.host().needs_layout() {
                self.host_mut().layout();
                self.layout_completed();
                progressed = true;
            }
            let animations = self.host_mut().take_animations();
            for animation in animations {
                self.animation_completed(animation.ticket, true);
                progressed = true;
            }
            if !progressed {
                break;
            }
            rounds += 1;
        }
        rounds
    }
}
