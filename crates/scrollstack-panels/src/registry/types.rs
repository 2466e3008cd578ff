//! Core types and lookups for the panel registry.

use std::collections::HashSet;

use scrollstack_common::PanelId;
use serde::{Deserialize, Serialize};

use crate::item::{ArrangedEntry, ArrangedItem};

/// The ordered arranged list. Order here is the visual order of the stack
/// and the only source of truth for index lookups; a panel appears at most
/// once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RegistrySnapshot")]
pub struct PanelRegistry {
    /// Top-level entries, first to last along the stack axis.
    pub(super) entries: Vec<ArrangedEntry>,
}

#[derive(Deserialize)]
struct RegistrySnapshot {
    entries: Vec<ArrangedEntry>,
}

impl TryFrom<RegistrySnapshot> for PanelRegistry {
    type Error = String;

    fn try_from(snapshot: RegistrySnapshot) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for entry in &snapshot.entries {
            if !seen.insert(entry.panel()) {
                return Err(format!("{} appears more than once", entry.panel()));
            }
        }
        Ok(Self {
            entries: snapshot.entries,
        })
    }
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many top-level items are arranged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the panel's own view when it is arranged bare.
    pub fn arranged_index(&self, panel: PanelId) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.item == ArrangedItem::Direct(panel))
    }

    /// Index of the wrapper holding the panel's view.
    pub fn container_index(&self, panel: PanelId) -> Option<usize> {
        self.entries.iter().position(|e| match e.item {
            ArrangedItem::Wrapped { panel: p, .. } => p == panel,
            ArrangedItem::Direct(_) => false,
        })
    }

    /// Position of the panel's top-level item, wrapped or not.
    pub fn resolved_index(&self, panel: PanelId) -> Option<usize> {
        self.arranged_index(panel)
            .or_else(|| self.container_index(panel))
    }

    /// Whether the panel's own view is a top-level item.
    pub fn is_arranged(&self, panel: PanelId) -> bool {
        self.arranged_index(panel).is_some()
    }

    /// Whether the panel is present at all, bare or wrapped.
    pub fn is_arranged_or_contained(&self, panel: PanelId) -> bool {
        self.resolved_index(panel).is_some()
    }

    /// The top-level entry standing for `panel`.
    pub fn entry(&self, panel: PanelId) -> Option<&ArrangedEntry> {
        self.resolved_index(panel).map(|i| &self.entries[i])
    }

    /// All entries in visual order.
    pub fn entries(&self) -> &[ArrangedEntry] {
        &self.entries
    }

    /// Panel handles in visual order.
    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.entries.iter().map(|e| e.panel()).collect()
    }
}
