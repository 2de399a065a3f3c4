//! Read-only queries over piles and stacks.
//!
//! Everything here is side-effect free. "Not there" is always an explicit
//! `None` or `false`, never an error - rule callbacks check before using.

use crate::core::CardId;
use crate::piles::PileId;

use super::state::Table;

impl Table {
    /// A card's position in its pile (0 = bottom), or `None` when it is
    /// in no pile.
    #[must_use]
    pub fn position_in_pile(&self, card: CardId) -> Option<usize> {
        let pile = self.cards.card(card).pile.clone()?;
        self.piles.items(&pile)?.iter().position(|&c| c == card)
    }

    /// The cards of a pile, bottom first. Empty when the pile does not
    /// exist.
    #[must_use]
    pub fn cards_in_pile(&self, pile: &PileId) -> &[CardId] {
        self.piles.items(pile).unwrap_or(&[])
    }

    /// Number of cards in a pile. Zero when the pile does not exist.
    #[must_use]
    pub fn pile_size(&self, pile: &PileId) -> usize {
        self.cards_in_pile(pile).len()
    }

    /// The top (last) card of a pile, or `None` when empty.
    #[must_use]
    pub fn top_card(&self, pile: &PileId) -> Option<CardId> {
        self.cards_in_pile(pile).last().copied()
    }

    /// The bottom (first) card of a pile, or `None` when empty.
    #[must_use]
    pub fn bottom_card(&self, pile: &PileId) -> Option<CardId> {
        self.cards_in_pile(pile).first().copied()
    }

    /// A card's position among its stack siblings (0 = oldest), or `None`
    /// when it is not stacked on anything.
    #[must_use]
    pub fn position_in_stack(&self, card: CardId) -> Option<usize> {
        let parent = self.cards.card(card).stacked_on?;
        self.cards
            .stack_children(parent)
            .iter()
            .position(|&c| c == card)
    }

    /// Is this card the top card of its pile? False when pile-less.
    #[must_use]
    pub fn is_top_of_pile(&self, card: CardId) -> bool {
        match self.cards.card(card).pile.as_ref() {
            Some(pile) => self.top_card(pile) == Some(card),
            None => false,
        }
    }

    /// Is this card the top of its stack?
    ///
    /// True for an unstacked card with no children, or for a stacked card
    /// with no children that is the newest (last) among its siblings.
    #[must_use]
    pub fn is_top_of_stack(&self, card: CardId) -> bool {
        let instance = self.cards.card(card);
        if instance.has_stack() {
            return false;
        }
        match instance.stacked_on {
            None => true,
            Some(parent) => self.cards.stack_children(parent).last() == Some(&card),
        }
    }

    /// The root of a card's stack chain (the card itself when unstacked).
    #[must_use]
    pub fn stack_root(&self, card: CardId) -> CardId {
        self.cards.stack_root(card)
    }

    /// Is `candidate` the card itself or one of its stack ancestors?
    #[must_use]
    pub fn is_stack_ancestor(&self, card: CardId, candidate: CardId) -> bool {
        self.cards.is_stack_ancestor(card, candidate)
    }

    /// Direct stack children of a card, oldest first.
    #[must_use]
    pub fn stack_children(&self, card: CardId) -> &[CardId] {
        self.cards.stack_children(card)
    }
}
