//! Stack-tree operations over the card arena.
//!
//! Cards form a forest via `stacked_on` back-references and per-card child
//! lists. This module is the only place those two fields are written, so
//! the round-trip invariant (a card is in its parent's child list exactly
//! when `stacked_on` points at that parent) holds everywhere else by
//! construction.
//!
//! The attach/detach primitives never touch pile state; the move engine
//! composes them with the pile primitives.

use crate::core::CardId;
use crate::piles::PileId;

use super::store::CardStore;

impl CardStore {
    /// Find the root of a card's stack chain.
    ///
    /// Follows `stacked_on` links to the unstacked base. If a manufactured
    /// cyclic state leads the traversal back to the starting card, the
    /// root is defined as the starting card's immediate parent rather than
    /// looping forever. The engine never produces such a state.
    #[must_use]
    pub fn stack_root(&self, card: CardId) -> CardId {
        let mut current = card;
        while let Some(parent) = self.card(current).stacked_on {
            if parent == card {
                return self.card(card).stacked_on.unwrap_or(card);
            }
            current = parent;
        }
        current
    }

    /// Is `candidate` the card itself or one of its stack ancestors?
    ///
    /// Walks the `stacked_on` chain from `card`. Used to refuse moves that
    /// would anchor a stack to its own descendant.
    #[must_use]
    pub fn is_stack_ancestor(&self, card: CardId, candidate: CardId) -> bool {
        if card == candidate {
            return true;
        }
        let mut current = card;
        while let Some(parent) = self.card(current).stacked_on {
            if parent == candidate {
                return true;
            }
            if parent == card {
                // manufactured cycle: the chain will never leave it
                return false;
            }
            current = parent;
        }
        false
    }

    /// Direct children of a card, oldest first.
    #[must_use]
    pub fn stack_children(&self, card: CardId) -> &[CardId] {
        self.card(card).children()
    }

    /// Number of transitive stack descendants of `base` currently sitting
    /// in `pile`.
    ///
    /// At rest this is the full subtree size (a stack shares its root's
    /// pile); mid-operation it counts only the part already re-inserted,
    /// which is exactly what the insertion-index computation needs.
    #[must_use]
    pub(crate) fn stacked_span_in_pile(&self, base: CardId, pile: &PileId) -> usize {
        let mut count = 0;
        for &child in self.stack_children(base) {
            if self.card(child).pile.as_ref() == Some(pile) {
                count += 1;
            }
            count += self.stacked_span_in_pile(child, pile);
        }
        count
    }

    /// Attach `child` as the newest (last) direct child of `parent`.
    ///
    /// Pile state is untouched. The child must currently be parentless;
    /// callers detach first.
    pub(crate) fn attach_to_stack(&mut self, child: CardId, parent: CardId) {
        debug_assert!(
            self.card(child).stacked_on.is_none(),
            "attach requires a parentless child"
        );
        self.card_mut(child).stacked_on = Some(parent);
        self.card_mut(parent).push_child(child);
    }

    /// Detach `child` from its parent, if it has one.
    ///
    /// Clears `stacked_on` and removes the child from the parent's list,
    /// dropping the list entirely when it empties. Pile state and the
    /// child's own children are untouched.
    pub(crate) fn detach_from_stack(&mut self, child: CardId) {
        if let Some(parent) = self.card_mut(child).stacked_on.take() {
            self.card_mut(parent).remove_child(child);
        }
    }
}
