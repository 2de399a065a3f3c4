//! Rules boundary for game implementations.
//!
//! Games implement `GameRules` to define their rules:
//! - how a fresh game is populated (`setup`)
//! - whether a card may be played, with optional prep/cleanup hooks
//! - where a play lands (`play_target`)
//! - what playing a card does (`play_card`)
//!
//! The engine never enforces turn structure or legality itself; the host
//! drives these callbacks and they call back into the table's move and
//! query APIs.

use crate::core::CardId;
use crate::piles::PileId;
use crate::table::Table;

/// Preparation hook run before a card is considered for play.
///
/// May return a cleanup hook to run after the play resolves.
pub type PrepFn = fn(&mut Table, CardId) -> Option<CleanupFn>;

/// Cleanup hook returned by a [`PrepFn`].
pub type CleanupFn = fn(&mut Table, CardId);

/// Whether a card can be played right now.
#[derive(Clone, Copy, Debug)]
pub enum Playable {
    /// The card cannot be played.
    No,
    /// The card can be played as-is.
    Yes,
    /// The card can be played after running a preparation hook.
    WithPrep(PrepFn),
}

impl Playable {
    /// Does this verdict allow a play at all?
    #[must_use]
    pub fn allows_play(&self) -> bool {
        !matches!(self, Playable::No)
    }
}

/// Where a play lands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayTarget {
    /// No legal target; the play is dropped.
    None,
    /// The card plays onto a pile.
    Pile(PileId),
    /// The card plays onto another card.
    Card(CardId),
}

/// Game rules trait.
///
/// `playable` and `play_target` are pure decisions; `setup`, `play_card`
/// and `cleanup` mutate the table through the move engine.
pub trait GameRules {
    /// Populate piles and cards for a fresh game.
    ///
    /// Called by [`Table::new_game`] after the old state is dropped.
    fn setup(&mut self, table: &mut Table);

    /// May this card be played right now?
    ///
    /// Defaults to yes.
    fn playable(&self, table: &Table, card: CardId) -> Playable {
        let _ = (table, card);
        Playable::Yes
    }

    /// Resolve where a play lands.
    ///
    /// `pile` and `onto` describe what the player indicated (a pile, a
    /// card, possibly both or neither). The default prefers the indicated
    /// card, then the indicated pile, then no target.
    fn play_target(
        &self,
        table: &Table,
        card: CardId,
        pile: Option<&PileId>,
        onto: Option<CardId>,
    ) -> PlayTarget {
        let _ = (table, card);
        match (onto, pile) {
            (Some(target), _) => PlayTarget::Card(target),
            (None, Some(pile)) => PlayTarget::Pile(pile.clone()),
            (None, None) => PlayTarget::None,
        }
    }

    /// Carry out a play against a resolved target.
    fn play_card(&mut self, table: &mut Table, card: CardId, target: PlayTarget);

    /// Tear-down hook run by [`Table::new_game`] before state is dropped.
    fn cleanup(&mut self, table: &mut Table) {
        let _ = table;
    }

    /// Drive one play attempt end to end.
    ///
    /// Checks `playable` (running the prep hook if one is supplied),
    /// resolves the target, applies `play_card`, then runs any cleanup
    /// hook the prep returned. Returns false when the card was not
    /// playable or no target resolved.
    fn try_play(
        &mut self,
        table: &mut Table,
        card: CardId,
        pile: Option<&PileId>,
        onto: Option<CardId>,
    ) -> bool {
        let cleanup = match self.playable(table, card) {
            Playable::No => return false,
            Playable::Yes => None,
            Playable::WithPrep(prep) => prep(table, card),
        };

        let target = self.play_target(table, card, pile, onto);
        let played = if target == PlayTarget::None {
            false
        } else {
            self.play_card(table, card, target);
            true
        };

        if let Some(cleanup) = cleanup {
            cleanup(table, card);
        }
        played
    }
}
