//! The table: one logical game session.
//!
//! A `Table` owns everything a session mutates: the card arena, the pile
//! store, and the RNG, plus the immutable card library it creates
//! instances from. All mutation happens synchronously through the move
//! engine (`table::moves`); everything else reads.
//!
//! A multi-session host gives each session its own `Table` - nothing here
//! is shared or locked.

use tracing::debug;

use crate::cards::{CardInstance, CardStore};
use crate::core::{CardId, GameRng, SetupError};
use crate::library::{CardLibrary, TypeId};
use crate::piles::{PileId, PileStore};
use crate::rules::GameRules;

/// One game session: library, cards, piles, RNG.
#[derive(Debug)]
pub struct Table {
    library: CardLibrary,
    pub(crate) cards: CardStore,
    pub(crate) piles: PileStore,
    pub(crate) rng: GameRng,
}

impl Table {
    /// Create a table over a library, seeded from OS entropy.
    #[must_use]
    pub fn new(library: CardLibrary) -> Self {
        Self::with_seed(library, GameRng::from_entropy().seed())
    }

    /// Create a table with an explicit RNG seed (reproducible shuffles).
    #[must_use]
    pub fn with_seed(library: CardLibrary, seed: u64) -> Self {
        Self {
            library,
            cards: CardStore::new(),
            piles: PileStore::new(),
            rng: GameRng::new(seed),
        }
    }

    /// The card library this table creates instances from.
    #[must_use]
    pub fn library(&self) -> &CardLibrary {
        &self.library
    }

    // === Cards ===

    /// Create a card instance of a registered type.
    ///
    /// The instance takes a deep copy of the type's properties; later
    /// template changes never affect it. The new card is loose: in no
    /// pile, in no stack.
    pub fn create_card(&mut self, type_id: &TypeId, face_up: bool) -> Result<CardId, SetupError> {
        let template = self
            .library
            .get(type_id)
            .ok_or_else(|| SetupError::UnknownType {
                type_id: type_id.0.clone(),
            })?;
        let properties = template.properties.clone();
        Ok(self.cards.spawn(type_id.clone(), face_up, properties))
    }

    /// Get a card instance.
    ///
    /// Panics on an unknown id (an id from another session or from before
    /// a reset).
    #[must_use]
    pub fn card(&self, id: CardId) -> &CardInstance {
        self.cards.card(id)
    }

    /// Get a card instance without panicking.
    #[must_use]
    pub fn get_card(&self, id: CardId) -> Option<&CardInstance> {
        self.cards.get(id)
    }

    /// Flip a card over.
    pub fn flip_card(&mut self, id: CardId) {
        self.cards.card_mut(id).flip();
    }

    /// Set a card's orientation.
    pub fn set_face_up(&mut self, id: CardId, face_up: bool) {
        self.cards.card_mut(id).face_up = face_up;
    }

    /// Number of live card instances.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    // === Piles ===

    /// Create an empty pile.
    pub fn create_pile(&mut self, id: impl Into<PileId>) -> Result<(), SetupError> {
        self.piles.create_pile(id)
    }

    /// Delete a pile.
    ///
    /// Member cards are detached from the pile (their `pile` field is
    /// cleared) but their stacking relationships are untouched and the
    /// cards themselves live on. Group memberships of the pile are
    /// dropped. Deleting a pile that does not exist is a no-op.
    pub fn delete_pile(&mut self, id: &PileId) {
        let Some(members) = self.piles.items(id).map(<[CardId]>::to_vec) else {
            return;
        };
        for card in members {
            self.cards.card_mut(card).pile = None;
        }
        self.piles.remove_pile(id);
    }

    /// Check if a pile exists.
    #[must_use]
    pub fn has_pile(&self, id: &PileId) -> bool {
        self.piles.contains(id)
    }

    /// Add a pile to a group (idempotent).
    pub fn add_pile_to_group(&mut self, group: impl Into<String>, pile: impl Into<PileId>) {
        self.piles.add_to_group(group, pile);
    }

    /// Remove a pile from a group.
    pub fn remove_pile_from_group(&mut self, group: &str, pile: &PileId) {
        self.piles.remove_from_group(group, pile);
    }

    /// Check pile membership in a group.
    #[must_use]
    pub fn is_pile_in_group(&self, group: &str, pile: &PileId) -> bool {
        self.piles.is_in_group(group, pile)
    }

    /// All piles in a group, in insertion order.
    #[must_use]
    pub fn piles_in_group(&self, group: &str) -> &[PileId] {
        self.piles.piles_in_group(group)
    }

    /// All groups a pile belongs to.
    #[must_use]
    pub fn groups_of_pile(&self, pile: &PileId) -> Vec<String> {
        self.piles.groups_of(pile)
    }

    // === Reset ===

    /// Full-state reset.
    ///
    /// Runs the rules' `cleanup`, drops every card instance, empties every
    /// pile's item list (piles and pile groups survive), then runs the
    /// rules' `setup` to populate the fresh game. The id allocator is
    /// kept: card ids are never reused, even across games.
    pub fn new_game<R: GameRules>(&mut self, rules: &mut R) {
        rules.cleanup(self);

        self.cards.clear();
        self.piles.clear_items();
        debug!("table reset, starting new game");

        rules.setup(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::CardTemplate;

    fn library() -> CardLibrary {
        let mut lib = CardLibrary::new();
        lib.register(CardTemplate::new(TypeId::new("t1"), "face-1").with_prop("rank", 1i32))
            .unwrap();
        lib.register(CardTemplate::new(TypeId::new("t2"), "face-2").with_prop("rank", 2i32))
            .unwrap();
        lib
    }

    #[test]
    fn test_create_card_snapshots_properties() {
        let mut table = Table::with_seed(library(), 42);

        let c = table.create_card(&TypeId::new("t1"), true).unwrap();

        let card = table.card(c);
        assert!(card.face_up);
        assert_eq!(card.type_id, TypeId::new("t1"));
        assert_eq!(card.get_int("rank", 0), 1);
        assert!(card.pile.is_none());
    }

    #[test]
    fn test_create_card_unknown_type() {
        let mut table = Table::with_seed(library(), 42);

        let err = table.create_card(&TypeId::new("nope"), false).unwrap_err();
        assert_eq!(
            err,
            SetupError::UnknownType {
                type_id: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_flip_and_set_face() {
        let mut table = Table::with_seed(library(), 42);
        let c = table.create_card(&TypeId::new("t1"), false).unwrap();

        table.flip_card(c);
        assert!(table.card(c).face_up);

        table.set_face_up(c, false);
        assert!(!table.card(c).face_up);
    }

    #[test]
    fn test_delete_pile_detaches_cards() {
        let mut table = Table::with_seed(library(), 42);
        table.create_pile("p").unwrap();

        let a = table.create_card(&TypeId::new("t1"), false).unwrap();
        let b = table.create_card(&TypeId::new("t2"), false).unwrap();
        table.put_card_on_pile(a, &"p".into());
        table.put_card_on_pile(b, &"p".into());
        table.stack_onto(b, a).unwrap();

        table.delete_pile(&"p".into());

        assert!(!table.has_pile(&"p".into()));
        assert!(table.card(a).pile.is_none());
        assert!(table.card(b).pile.is_none());
        // Stacking links survive pile deletion.
        assert_eq!(table.card(b).stacked_on, Some(a));
    }

    #[test]
    fn test_delete_missing_pile_is_noop() {
        let mut table = Table::with_seed(library(), 42);
        table.delete_pile(&"ghost".into());
    }

    #[test]
    fn test_pile_groups_via_table() {
        let mut table = Table::with_seed(library(), 42);
        table.create_pile("a").unwrap();
        table.create_pile("b").unwrap();

        table.add_pile_to_group("tableau", "a");
        table.add_pile_to_group("tableau", "b");

        assert!(table.is_pile_in_group("tableau", &"a".into()));
        assert_eq!(table.piles_in_group("tableau").len(), 2);

        table.remove_pile_from_group("tableau", &"a".into());
        assert!(!table.is_pile_in_group("tableau", &"a".into()));
    }
}
