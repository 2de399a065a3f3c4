//! Named ordered piles and the pile-group index.
//!
//! A pile is an ordered list of card ids: index 0 is the bottom, the last
//! index is the top, and insertion order is visual order. The store keeps
//! the lists; the per-card `pile` field lives on `CardInstance`, and the
//! move engine is the only code that writes both sides.
//!
//! Pile groups are a many-to-many label over pile ids, used for settings
//! inheritance and rule-callback convenience. They have no lifecycle of
//! their own beyond add/remove.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CardId, SetupError};

/// Name of a pile.
///
/// Assigned at game construction. Names starting with `'.'` and the name
/// `"*"` are reserved for the settings resolver and rejected by
/// `create_pile`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileId(pub String);

impl PileId {
    /// Create a new pile ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Is this a name `create_pile` would accept?
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0 != "*" && !self.0.starts_with('.')
    }
}

impl From<&str> for PileId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered pile lists plus the many-to-many pile-group index.
#[derive(Clone, Debug, Default)]
pub struct PileStore {
    items: FxHashMap<PileId, Vec<CardId>>,
    groups: FxHashMap<String, Vec<PileId>>,
}

impl PileStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pile.
    ///
    /// Fails with `DuplicatePile` if the name is taken and `InvalidPileId`
    /// if the name is reserved.
    pub fn create_pile(&mut self, id: impl Into<PileId>) -> Result<(), SetupError> {
        let id = id.into();
        if !id.is_valid() {
            return Err(SetupError::InvalidPileId { pile_id: id.0 });
        }
        if self.items.contains_key(&id) {
            return Err(SetupError::DuplicatePile { pile_id: id.0 });
        }
        self.items.insert(id, Vec::new());
        Ok(())
    }

    /// Drop a pile and its group memberships.
    ///
    /// Callers are responsible for the card side (clearing member cards'
    /// `pile` fields) before calling this; `Table::delete_pile` does both.
    pub(crate) fn remove_pile(&mut self, id: &PileId) -> Option<Vec<CardId>> {
        let items = self.items.remove(id)?;
        for members in self.groups.values_mut() {
            members.retain(|p| p != id);
        }
        Some(items)
    }

    /// Check if a pile exists.
    #[must_use]
    pub fn contains(&self, id: &PileId) -> bool {
        self.items.contains_key(id)
    }

    /// A pile's item list, bottom first. `None` when the pile does not
    /// exist.
    #[must_use]
    pub fn items(&self, id: &PileId) -> Option<&[CardId]> {
        self.items.get(id).map(Vec::as_slice)
    }

    /// Mutable item list for the move engine.
    pub(crate) fn items_mut(&mut self, id: &PileId) -> Option<&mut Vec<CardId>> {
        self.items.get_mut(id)
    }

    /// Number of piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no piles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all pile ids (unordered).
    pub fn pile_ids(&self) -> impl Iterator<Item = &PileId> {
        self.items.keys()
    }

    /// Empty every pile's item list, keeping the piles and groups.
    pub(crate) fn clear_items(&mut self) {
        for items in self.items.values_mut() {
            items.clear();
        }
    }

    // === Pile groups ===

    /// Add a pile to a group. Idempotent: adding an existing member is a
    /// no-op.
    pub fn add_to_group(&mut self, group: impl Into<String>, pile: impl Into<PileId>) {
        let pile = pile.into();
        let members = self.groups.entry(group.into()).or_default();
        if !members.contains(&pile) {
            members.push(pile);
        }
    }

    /// Remove a pile from a group. No-op when not a member.
    pub fn remove_from_group(&mut self, group: &str, pile: &PileId) {
        if let Some(members) = self.groups.get_mut(group) {
            members.retain(|p| p != pile);
        }
    }

    /// Check pile membership in a group.
    #[must_use]
    pub fn is_in_group(&self, group: &str, pile: &PileId) -> bool {
        self.groups.get(group).map_or(false, |m| m.contains(pile))
    }

    /// All piles in a group, in insertion order.
    #[must_use]
    pub fn piles_in_group(&self, group: &str) -> &[PileId] {
        self.groups.get(group).map_or(&[], Vec::as_slice)
    }

    /// All groups a pile belongs to.
    ///
    /// Order is unspecified; the settings resolver sorts what it needs.
    #[must_use]
    pub fn groups_of(&self, pile: &PileId) -> Vec<String> {
        self.groups
            .iter()
            .filter(|(_, members)| members.contains(pile))
            .map(|(g, _)| g.clone())
            .collect()
    }
}
