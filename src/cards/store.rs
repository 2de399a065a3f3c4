//! Card instance arena.
//!
//! The `CardStore` owns every card instance in a session together with the
//! id allocator that names them. Lookup is by `CardId`; the store never
//! frees individual cards - instances live until `clear`, the wholesale
//! reset used by `new_game` (which keeps the allocator, so ids are never
//! reused).

use rustc_hash::FxHashMap;

use crate::core::{CardId, IdAllocator};
use crate::library::{Properties, TypeId};

use super::instance::CardInstance;

/// Arena of card instances plus the session id allocator.
#[derive(Clone, Debug, Default)]
pub struct CardStore {
    cards: FxHashMap<CardId, CardInstance>,
    ids: IdAllocator,
}

impl CardStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new card instance and return its id.
    pub fn spawn(&mut self, type_id: TypeId, face_up: bool, properties: Properties) -> CardId {
        let id = self.ids.alloc();
        self.cards
            .insert(id, CardInstance::new(id, type_id, face_up, properties));
        id
    }

    /// Get a card instance.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardInstance> {
        self.cards.get(&id)
    }

    /// Get a mutable card instance.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&id)
    }

    /// Get a card instance, panicking if the id is unknown.
    ///
    /// Move and query code uses this: an unknown id means the caller is
    /// holding an id from a different session or from before a reset.
    #[must_use]
    pub fn card(&self, id: CardId) -> &CardInstance {
        self.cards
            .get(&id)
            .unwrap_or_else(|| panic!("unknown card {id}"))
    }

    /// Mutable variant of [`card`](Self::card).
    pub fn card_mut(&mut self, id: CardId) -> &mut CardInstance {
        self.cards
            .get_mut(&id)
            .unwrap_or_else(|| panic!("unknown card {id}"))
    }

    /// Check if the store contains an id.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of live card instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card instances (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.values()
    }

    /// Drop every card instance, keeping the id allocator.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Number of ids handed out over the session lifetime.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.ids.allocated()
    }
}
