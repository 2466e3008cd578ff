//! Mutating operations on the registry: insert, remove, set visibility.

use scrollstack_common::PanelId;

use super::PanelRegistry;
use crate::item::{ArrangedEntry, Visibility};
use crate::location::InsertionLocation;

impl PanelRegistry {
    /// Resolve `location` against the current list.
    pub fn resolve(&self, location: &InsertionLocation) -> usize {
        location.resolve(self.entries.len(), |p| self.resolved_index(p))
    }

    /// Insert `entry` at `location` and return the index it landed at.
    ///
    /// A panel that is already present is taken out first, so `location`
    /// resolves against the remaining entries.
    pub fn insert(&mut self, entry: ArrangedEntry, location: &InsertionLocation) -> usize {
        self.remove(entry.panel());
        let index = self.resolve(location);
        self.entries.insert(index, entry);
        index
    }

    /// Remove the panel's top-level entry. Returns where it was and what it
    /// was, or `None` if the panel is not present.
    pub fn remove(&mut self, panel: PanelId) -> Option<(usize, ArrangedEntry)> {
        let index = self.resolved_index(panel)?;
        Some((index, self.entries.remove(index)))
    }

    /// Flip the hidden flag and alpha of the panel's top-level entry.
    /// Returns `false` if the panel is not present.
    pub fn set_visible(&mut self, panel: PanelId, visible: bool) -> bool {
        match self.resolved_index(panel) {
            Some(index) => {
                self.entries[index].visibility = Visibility::from_visible(visible);
                true
            }
            None => false,
        }
    }
}
