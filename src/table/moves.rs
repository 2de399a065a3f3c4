//! The move engine: every composite mutation of pile and stack state.
//!
//! Each public operation here leaves the two structural invariants intact,
//! including on early-return paths:
//!
//! - a card's `stacked_on` matches membership in the parent's child list;
//! - a card's `pile` field matches membership in that pile's item list.
//!
//! Operations compose four primitives: detach a card from its pile, detach
//! a card *and its whole stack* from their piles (stack links untouched -
//! a transient state only ever visible inside one operation), insert into
//! a pile at an index, and the stack attach/detach primitives on
//! `CardStore`.
//!
//! Illegal moves: stacking a card onto itself is an error (a rules bug by
//! contract); anchoring a stack to its own descendant is reported via
//! `tracing` and refused as a no-op, since rule logic can run into it from
//! unexpected player input. Both are rejected before any mutation.
//! Everything else no-ops when its precondition is already satisfied, so
//! rule code can call unconditionally.

use tracing::warn;

use crate::core::{CardId, MoveError};
use crate::piles::PileId;

use super::state::Table;

impl Table {
    // === Pile primitives ===

    /// Remove a card from its pile item list and clear its `pile` field.
    /// Stacking state is untouched. No-op when the card is pile-less.
    fn pile_detach(&mut self, card: CardId) {
        let Some(pile) = self.cards.card(card).pile.clone() else {
            return;
        };
        if let Some(items) = self.piles.items_mut(&pile) {
            items.retain(|&c| c != card);
        }
        self.cards.card_mut(card).pile = None;
    }

    /// Pile-detach a card and, recursively, everything stacked on it.
    ///
    /// Stack links are untouched, so this can leave a stack scattered
    /// across no piles at all - callers re-home the stack before
    /// returning.
    fn pile_detach_stack(&mut self, card: CardId) {
        self.pile_detach(card);
        let children: Vec<CardId> = self.cards.stack_children(card).to_vec();
        for child in children {
            self.pile_detach_stack(child);
        }
    }

    /// Insert a card into a pile at an index (clamped to the list length)
    /// and point its `pile` field there. Panics when the pile does not
    /// exist.
    fn pile_insert_at(&mut self, card: CardId, pile: &PileId, index: usize) {
        let items = self
            .piles
            .items_mut(pile)
            .unwrap_or_else(|| panic!("no pile '{pile}'"));
        let index = index.min(items.len());
        items.insert(index, card);
        self.cards.card_mut(card).pile = Some(pile.clone());
    }

    /// Append a card to the top (end) of a pile.
    fn pile_append(&mut self, card: CardId, pile: &PileId) {
        let len = self
            .piles
            .items(pile)
            .unwrap_or_else(|| panic!("no pile '{pile}'"))
            .len();
        self.pile_insert_at(card, pile, len);
    }

    /// Position of a card within a specific pile's item list.
    fn index_in_pile(&self, pile: &PileId, card: CardId) -> Option<usize> {
        self.piles.items(pile)?.iter().position(|&c| c == card)
    }

    // === Public operations ===

    /// Fully detach a card from the play structure.
    ///
    /// Everything stacked on the card is unstacked in place (each
    /// dependent stays where it sits, becoming independent, relative
    /// order preserved), the card is unstacked from its own parent, and
    /// finally removed from its pile. Idempotent: already-detached cards
    /// are a no-op.
    pub fn remove_from_pile(&mut self, card: CardId) {
        self.unstack_all_from(card);
        self.unstack_card(card);
        self.pile_detach(card);
    }

    /// Remove a card and its entire dependent stack from their pile(s),
    /// keeping the stacking links among them.
    ///
    /// The card is first detached from its own parent (if any); the
    /// removed stack stays a stack, just pile-less.
    pub fn remove_stack_from_pile(&mut self, card: CardId) {
        self.cards.detach_from_stack(card);
        self.pile_detach_stack(card);
    }

    /// Stack a card (with its own dependent stack) onto a target card.
    ///
    /// The card becomes the newest (last) direct child of the target. If
    /// the target is in a pile, the card's stack is inserted directly
    /// after the target and everything already stacked on it; if the
    /// target is pile-less, the card's stack becomes pile-less too.
    ///
    /// Fails with `MoveError::SelfStack` when `card == target`. A target
    /// inside the card's own stack would create a cycle: that is reported
    /// and refused as a no-op. Both checks run before any mutation.
    pub fn stack_onto(&mut self, card: CardId, target: CardId) -> Result<(), MoveError> {
        if card == target {
            return Err(MoveError::SelfStack { card });
        }
        if self.cards.is_stack_ancestor(target, card) {
            warn!(%card, %target, "refusing stack: target is inside the moving card's own stack");
            return Ok(());
        }

        self.cards.detach_from_stack(card);
        if self.cards.card(target).pile.is_some() {
            self.insert_stack_after_unchecked(card, target);
        } else {
            self.pile_detach_stack(card);
        }
        self.cards.attach_to_stack(card, target);
        Ok(())
    }

    /// Move a card and its dependent stack to sit directly after another
    /// card in that card's pile.
    ///
    /// "Directly after" means after the anchor *and* the entire stack
    /// already on it. If the moved card was stacked on a parent that ends
    /// up in a different pile than the anchor, that link is severed -
    /// stacks cannot span piles at rest. An anchor that is itself part of
    /// the moved card's stack is reported and refused as a no-op (moving
    /// would carry the anchor along with the thing being anchored).
    pub fn insert_stack_after(&mut self, card: CardId, after: CardId) {
        if self.cards.is_stack_ancestor(after, card) {
            warn!(%card, %after, "refusing insert: anchor is part of the moving card's own stack");
            return;
        }
        self.insert_stack_after_unchecked(card, after);
    }

    /// `insert_stack_after` minus the descendant guard; shared with
    /// `stack_onto`, whose guard already ran.
    fn insert_stack_after_unchecked(&mut self, card: CardId, after: CardId) {
        self.pile_detach_stack(card);

        let after_pile = self.cards.card(after).pile.clone();

        // Crossing piles forces detachment from a parent left behind.
        if let Some(parent) = self.cards.card(card).stacked_on {
            if self.cards.card(parent).pile != after_pile {
                self.cards.detach_from_stack(card);
            }
        }

        if let Some(pile) = after_pile {
            if let Some(pos) = self.index_in_pile(&pile, after) {
                let span = self.cards.stacked_span_in_pile(after, &pile);
                self.pile_insert_at(card, &pile, pos + 1 + span);
            }
        }
        // else: pile-less anchor - the moved stack stays pile-less.

        // Re-insert the card's own children right after it, in stack
        // order. They enter the card's new pile, so no link is severed.
        let children: Vec<CardId> = self.cards.stack_children(card).to_vec();
        for child in children {
            self.insert_stack_after_unchecked(child, card);
        }
    }

    /// Positional insert of a single card, dropping all its stack
    /// structure first.
    ///
    /// The card's dependents are unstacked in place and the card itself is
    /// detached from any parent before being inserted after `after`. Since
    /// stripping happens first, an anchor that *was* stacked on the card
    /// is legal here - only anchoring the card to itself is refused.
    pub fn insert_card_after(&mut self, card: CardId, after: CardId) {
        if card == after {
            warn!(%card, "refusing insert: card cannot anchor itself");
            return;
        }
        self.unstack_all_from(card);
        self.cards.detach_from_stack(card);
        self.insert_stack_after_unchecked(card, after);
    }

    /// Place a single card on top of a pile.
    ///
    /// Dependents are unstacked in place (they keep their pile
    /// positions); the card is detached from any parent and appended to
    /// the top (end) of the pile. Panics when the pile does not exist.
    pub fn put_card_on_pile(&mut self, card: CardId, pile: &PileId) {
        self.unstack_all_from(card);
        self.cards.detach_from_stack(card);
        self.pile_detach(card);
        self.pile_append(card, pile);
    }

    /// Move a card and its entire dependent stack to the top of a pile.
    ///
    /// The stack lands in pre-order: the card, then each direct child
    /// followed by its own subtree, preserving relative order. A parent
    /// link survives only when the parent already sits in the target
    /// pile. Panics when the pile does not exist.
    pub fn put_stack_on_pile(&mut self, card: CardId, pile: &PileId) {
        self.pile_detach_stack(card);

        if let Some(parent) = self.cards.card(card).stacked_on {
            if self.cards.card(parent).pile.as_ref() != Some(pile) {
                self.cards.detach_from_stack(card);
            }
        }

        self.pile_append(card, pile);

        let children: Vec<CardId> = self.cards.stack_children(card).to_vec();
        for child in children {
            self.put_stack_on_pile(child, pile);
        }
    }

    /// Unstack a card from its parent.
    ///
    /// No-op when the card is not stacked. When the card is in a pile and
    /// the former parent still has children there, the card is re-seated
    /// directly above the siblings that stayed behind, so pulling a card
    /// out of the middle of a stack leaves it just on top of the rest.
    pub fn unstack_card(&mut self, card: CardId) {
        let Some(parent) = self.cards.card(card).stacked_on else {
            return;
        };
        self.cards.detach_from_stack(card);

        let Some(pile) = self.cards.card(card).pile.clone() else {
            return;
        };
        if self.cards.stack_children(parent).is_empty() {
            return;
        }
        if self.index_in_pile(&pile, parent).is_none() {
            return;
        }

        self.pile_detach(card);
        if let Some(pos) = self.index_in_pile(&pile, parent) {
            let span = self.cards.stacked_span_in_pile(parent, &pile);
            self.pile_insert_at(card, &pile, pos + 1 + span);
        }
    }

    /// Unstack every direct child of a card (not recursive).
    ///
    /// Each child becomes an independent card, keeping its pile position,
    /// so relative order is preserved. Iterates over a snapshot of the
    /// child list.
    pub fn unstack_all_from(&mut self, base: CardId) {
        let children: Vec<CardId> = self.cards.stack_children(base).to_vec();
        for child in children {
            self.cards.detach_from_stack(child);
        }
    }

    /// Shuffle a pile with a uniform permutation.
    ///
    /// Stack structure is incompatible with a shuffled order, so every
    /// member card's direct children are severed first; afterwards no
    /// stacking links remain pile-wide. Membership is unchanged: the same
    /// cards, the same `pile` fields, a new order. Panics when the pile
    /// does not exist.
    pub fn shuffle_pile(&mut self, pile: &PileId) {
        let members: Vec<CardId> = self
            .piles
            .items(pile)
            .unwrap_or_else(|| panic!("no pile '{pile}'"))
            .to_vec();
        for card in members {
            self.unstack_all_from(card);
        }

        if let Some(items) = self.piles.items_mut(pile) {
            self.rng.shuffle(items);
        }
    }
}
