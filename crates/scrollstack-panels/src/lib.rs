//! A scrolling stack of panels.
//!
//! [`ScrollStackController`] keeps an ordered list of panels, each either
//! bare or wrapped in an inset container, and drives a host UI through the
//! traits in [`host`]: inserting, removing, showing and hiding panels and
//! scrolling one into view. Animation and layout are reported back by the
//! host, so the controller itself never blocks.

pub mod animation;
pub mod commands;
pub mod controller;
pub mod host;
pub mod item;
pub mod layout;
pub mod location;
pub mod panel;
pub mod registry;
pub mod scroll;

pub use animation::{AnimationParams, AnimationTicket, Callback, Transition};
pub use commands::StackCommand;
pub use controller::{AnimationSettings, Appearance, ControllerOptions, ScrollStackController};
pub use host::{HeadlessHost, StackHost, ViewNode};
pub use item::{ArrangedEntry, ArrangedItem, Visibility};
pub use layout::LayoutEngine;
pub use location::{InsertionLocation, Placement};
pub use panel::Panel;
pub use registry::PanelRegistry;
pub use scroll::{ScrollCoordinator, ScrollResolution};
