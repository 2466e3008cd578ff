//! Core types and constructors for ScrollStackController.

use std::collections::HashMap;

use scrollstack_common::{Axis, Color, ConfigError, Event, EventBus, PanelId, StackId};
use scrollstack_config::colors::parse_color;
use scrollstack_config::schema::{AnimationConfig, AppearanceConfig, ScrollStackConfig};

use crate::animation::{AnimationParams, AnimationTicket, Continuations};
use crate::host::StackHost;
use crate::item::ArrangedEntry;
use crate::registry::PanelRegistry;
use crate::scroll::ScrollCoordinator;

/// Visual settings pushed to the host's stacking container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub axis: Axis,
    pub separator_color: Color,
    /// Doubles as the stack's spacing.
    pub separator_thickness: f64,
    pub border_color: Color,
    pub border_width: f64,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            separator_color: Color::CLEAR,
            separator_thickness: 0.0,
            border_color: Color::GRAY,
            border_width: 0.5,
        }
    }
}

impl Appearance {
    pub fn from_config(config: &AppearanceConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            axis: config.axis,
            separator_color: parse_color(&config.separator_color)?,
            separator_thickness: config.separator_thickness,
            border_color: parse_color(&config.border_color)?,
            border_width: config.border_width,
        })
    }
}

/// Curves used for visibility changes and scrolling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    pub visibility: AnimationParams,
    pub scroll: AnimationParams,
    /// When false, scroll-to jumps straight to the offset.
    pub animate_scroll: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            visibility: AnimationParams::visibility(),
            scroll: AnimationParams::scroll(),
            animate_scroll: true,
        }
    }
}

impl AnimationSettings {
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            visibility: AnimationParams::from_curve(&config.visibility.curve()),
            scroll: AnimationParams::from_curve(&config.scroll.curve()),
            animate_scroll: config.animate_scroll,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerOptions {
    pub appearance: Appearance,
    pub animation: AnimationSettings,
}

impl ControllerOptions {
    pub fn from_config(config: &ScrollStackConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            appearance: Appearance::from_config(&config.appearance)?,
            animation: AnimationSettings::from_config(&config.animation),
        })
    }
}

/// Owns the arranged list of a scrolling stack and drives its host.
pub struct ScrollStackController<H: StackHost> {
    pub(super) id: StackId,
    pub(super) host: H,
    pub(super) registry: PanelRegistry,
    pub(super) scroll: ScrollCoordinator,
    pub(super) appearance: Appearance,
    pub(super) animation: AnimationSettings,
    /// Work waiting on in-flight animations, by ticket.
    pub(super) continuations: Continuations,
    /// Panels fading out, keyed to the fade that detaches them.
    pub(super) pending_removals: HashMap<PanelId, AnimationTicket>,
    pub(super) events: Option<EventBus>,
}

impl<H: StackHost> ScrollStackController<H> {
    pub fn new(host: H) -> Self {
        Self::with_options(host, ControllerOptions::default())
    }

    pub fn with_options(host: H, options: ControllerOptions) -> Self {
        let mut controller = Self {
            id: StackId::new(),
            host,
            registry: PanelRegistry::new(),
            scroll: ScrollCoordinator::new(),
            appearance: options.appearance,
            animation: options.animation,
            continuations: Continuations::default(),
            pending_removals: HashMap::new(),
            events: None,
        };
        controller.apply_appearance();
        controller
    }

    /// Publish lifecycle events to `bus`.
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    // -- Accessors --

    pub fn id(&self) -> &StackId {
        &self.id
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    pub fn events(&self) -> Option<&EventBus> {
        self.events.as_ref()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Panel handles in visual order.
    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.registry.panel_ids()
    }

    pub fn arranged_index(&self, panel: PanelId) -> Option<usize> {
        self.registry.arranged_index(panel)
    }

    pub fn container_index(&self, panel: PanelId) -> Option<usize> {
        self.registry.container_index(panel)
    }

    pub fn resolved_index(&self, panel: PanelId) -> Option<usize> {
        self.registry.resolved_index(panel)
    }

    pub fn is_arranged(&self, panel: PanelId) -> bool {
        self.registry.is_arranged(panel)
    }

    pub fn is_arranged_or_contained(&self, panel: PanelId) -> bool {
        self.registry.is_arranged_or_contained(panel)
    }

    /// The top-level item standing for `panel`, with its visibility.
    pub fn arranged_view(&self, panel: PanelId) -> Option<&ArrangedEntry> {
        self.registry.entry(panel)
    }

    /// How many animations have not reported back yet.
    pub fn pending_animations(&self) -> usize {
        self.continuations.len()
    }

    /// The panel a deferred scroll is waiting on.
    pub fn pending_scroll(&self) -> Option<PanelId> {
        self.scroll.pending_panel()
    }

    pub fn is_removal_pending(&self, panel: PanelId) -> bool {
        self.pending_removals.contains_key(&panel)
    }

    // -- Appearance --

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn set_axis(&mut self, axis: Axis) {
        self.appearance.axis = axis;
        self.host.set_axis(axis);
    }

    pub fn set_separator_color(&mut self, color: Color) {
        self.appearance.separator_color = color;
        self.host.set_separator_color(color);
    }

    pub fn set_separator_thickness(&mut self, thickness: f64) {
        self.appearance.separator_thickness = thickness;
        self.host.set_spacing(thickness);
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.appearance.border_color = color;
        self.host.set_border(color, self.appearance.border_width);
    }

    pub fn set_border_width(&mut self, width: f64) {
        self.appearance.border_width = width;
        self.host.set_border(self.appearance.border_color, width);
    }

    /// Replace every appearance setting at once.
    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
        self.apply_appearance();
    }

    pub fn animation_settings(&self) -> &AnimationSettings {
        &self.animation
    }

    fn apply_appearance(&mut self) {
        let a = self.appearance;
        self.host.set_axis(a.axis);
        self.host.set_spacing(a.separator_thickness);
        self.host.set_separator_color(a.separator_color);
        self.host.set_border(a.border_color, a.border_width);
    }

    pub(super) fn publish(&self, event: Event) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }

    pub(super) fn check_consistency(&self) {
        debug_assert_eq!(
            self.host.arranged_count(),
            self.registry.len(),
            "host and registry disagree on the arranged count"
        );
    }
}
