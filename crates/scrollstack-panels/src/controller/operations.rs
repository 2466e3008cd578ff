//! Insert, remove, show and hide on the ScrollStackController.

use scrollstack_common::{EdgeInsets, Event, PanelId};
use tracing::debug;

use crate::animation::{chain, Callback, Continuation, Transition};
use crate::host::StackHost;
use crate::item::{ArrangedEntry, ArrangedItem, Visibility};
use crate::location::{InsertionLocation, Placement};

use super::ScrollStackController;

impl<H: StackHost> ScrollStackController<H> {
    /// Insert `panel` at `location`, wrapped when `insets` is given. A panel
    /// that is already present is moved: it comes out first and `location`
    /// resolves against what remains. Returns the index it landed at.
    pub fn insert(
        &mut self,
        panel: PanelId,
        insets: Option<EdgeInsets>,
        location: InsertionLocation,
    ) -> usize {
        let revived = self.pending_removals.remove(&panel).is_some();
        if revived {
            debug!(%panel, "insert cancels pending removal");
        }

        let visibility = match self.registry.remove(panel) {
            Some((from, entry)) => {
                debug!(%panel, from, "moving arranged panel");
                self.host.remove_arranged(from, &entry.item);
                if revived {
                    Visibility::SHOWN
                } else {
                    entry.visibility
                }
            }
            None => Visibility::SHOWN,
        };

        if !self.host.is_child(panel) {
            self.host.attach_child(panel);
        }

        let item = ArrangedItem::new(panel, insets);
        let index = self
            .registry
            .insert(ArrangedEntry { item, visibility }, &location);
        self.host.insert_arranged(index, &item);
        if revived || visibility != Visibility::SHOWN {
            self.host.set_visibility(panel, visibility);
        }
        self.check_consistency();

        debug!(%panel, index, wrapped = item.is_wrapped(), "panel inserted");
        self.publish(Event::PanelInserted { panel, index });
        index
    }

    /// Append `panel` at the end of the stack.
    pub fn add(&mut self, panel: PanelId, insets: Option<EdgeInsets>) -> usize {
        self.insert(panel, insets, InsertionLocation::End)
    }

    /// Take `panel` (and its wrapper) out of the stack and detach it.
    ///
    /// When `animated`, the panel fades out first and detaches once the fade
    /// reports back, finished or not; `on_complete` only runs for a finished
    /// fade. An animated remove while a fade-out is already running joins
    /// that fade, and its callback runs after the first one. Returns `false`
    /// if the panel is not present.
    pub fn remove(&mut self, panel: PanelId, animated: bool, on_complete: Option<Callback>) -> bool {
        if !self.registry.is_arranged_or_contained(panel) {
            debug!(%panel, "remove ignored: panel not arranged");
            return false;
        }

        if let (true, Some(&ticket)) = (animated, self.pending_removals.get(&panel)) {
            if let Some(Continuation::Removal { on_complete: running, .. }) =
                self.continuations.get_mut(ticket)
            {
                *running = chain(running.take(), on_complete);
            }
            debug!(%panel, ?ticket, "remove joins running fade");
            return true;
        }

        if animated {
            self.registry.set_visible(panel, false);
            let ticket = self
                .continuations
                .park(Continuation::Removal { panel, on_complete });
            self.pending_removals.insert(panel, ticket);
            let transition = Transition::Visibility {
                panel,
                to: Visibility::HIDDEN,
            };
            self.host
                .animate(ticket, &transition, &self.animation.visibility);
            debug!(%panel, ?ticket, "panel fading out before removal");
        } else {
            self.detach(panel);
            if let Some(callback) = on_complete {
                callback();
            }
        }
        true
    }

    /// Set the panel's hidden flag and alpha. Returns `false` if the panel is
    /// not present. Making a panel visible cancels a pending animated
    /// removal.
    pub fn set_visible(
        &mut self,
        panel: PanelId,
        visible: bool,
        animated: bool,
        on_complete: Option<Callback>,
    ) -> bool {
        if !self.registry.set_visible(panel, visible) {
            debug!(%panel, visible, "visibility change ignored: panel not arranged");
            return false;
        }
        if visible && self.pending_removals.remove(&panel).is_some() {
            debug!(%panel, "show cancels pending removal");
        }

        let to = Visibility::from_visible(visible);
        if animated {
            let ticket = self
                .continuations
                .park(Continuation::Visibility { on_complete });
            self.host.animate(
                ticket,
                &Transition::Visibility { panel, to },
                &self.animation.visibility,
            );
        } else {
            self.host.set_visibility(panel, to);
            if let Some(callback) = on_complete {
                callback();
            }
        }

        self.publish(if visible {
            Event::PanelShown(panel)
        } else {
            Event::PanelHidden(panel)
        });
        true
    }

    /// Make `panel` visible. When it is not in the stack (or not attached)
    /// and `placement` is given, it is inserted there first.
    pub fn show(
        &mut self,
        panel: PanelId,
        placement: Option<Placement>,
        animated: bool,
        on_complete: Option<Callback>,
    ) -> bool {
        let present = self.registry.is_arranged_or_contained(panel) && self.host.is_child(panel);
        if !present {
            if let Some(placement) = placement {
                self.insert(panel, placement.insets, placement.location);
            }
        }
        self.set_visible(panel, true, animated, on_complete)
    }

    pub fn hide(&mut self, panel: PanelId, animated: bool, on_complete: Option<Callback>) -> bool {
        self.set_visible(panel, false, animated, on_complete)
    }

    /// Drop the panel's item from the stack and release it from the parent.
    pub(super) fn detach(&mut self, panel: PanelId) {
        self.pending_removals.remove(&panel);
        if let Some((index, entry)) = self.registry.remove(panel) {
            self.host.remove_arranged(index, &entry.item);
            self.check_consistency();
            debug!(%panel, index, "panel removed");
            self.publish(Event::PanelRemoved(panel));
        }
        if self.host.is_child(panel) {
            self.host.detach_child(panel);
        }
    }
}
