//! Card instances - runtime card state.
//!
//! A `CardInstance` is one physical card on the table at a specific
//! moment: its orientation, its property snapshot, which pile it sits in,
//! and its position in the stacking forest.
//!
//! ## Stacking fields
//!
//! `stacked_on` is a back-reference to the direct parent; `stack` is the
//! ordered list of direct children. The two are kept in sync by the stack
//! primitives on `CardStore` - a card is in its parent's `stack` exactly
//! when its `stacked_on` points at that parent. An empty child list is
//! represented as `None`, never as an empty vector: absence is the
//! "no dependents" signal the move engine branches on.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;
use crate::library::{Properties, PropertyKey, TypeId};
use crate::piles::PileId;

/// Ordered list of direct stack children. Stays inline for the short
/// fans that dominate real games.
pub type StackChildren = SmallVec<[CardId; 4]>;

/// A card instance on the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this instance, never reused within a session.
    pub id: CardId,

    /// The card type this instance was created from.
    pub type_id: TypeId,

    /// Is this card face up?
    pub face_up: bool,

    /// Deep copy of the type's properties, taken at creation time.
    /// Later edits to the template never show up here.
    pub properties: Properties,

    /// The pile this card currently sits in, if any.
    pub pile: Option<PileId>,

    /// Direct stack parent, if this card is stacked on another.
    pub stacked_on: Option<CardId>,

    /// Direct stack children, oldest first. `None` when there are none.
    pub stack: Option<StackChildren>,
}

impl CardInstance {
    /// Create a new instance.
    ///
    /// `properties` is the caller's snapshot of the template bag.
    #[must_use]
    pub fn new(id: CardId, type_id: TypeId, face_up: bool, properties: Properties) -> Self {
        Self {
            id,
            type_id,
            face_up,
            properties,
            pile: None,
            stacked_on: None,
            stack: None,
        }
    }

    /// Does this card have any cards stacked on it?
    #[must_use]
    pub fn has_stack(&self) -> bool {
        self.stack.is_some()
    }

    /// Is this card stacked on another card?
    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stacked_on.is_some()
    }

    /// Direct children, oldest first. Empty when unstacked-upon.
    #[must_use]
    pub fn children(&self) -> &[CardId] {
        self.stack.as_deref().unwrap_or(&[])
    }

    /// Flip the card over.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Get an integer property with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.properties
            .get(&PropertyKey::new(key))
            .and_then(|v| v.as_int())
            .unwrap_or(default)
    }

    /// Get a boolean property with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.properties
            .get(&PropertyKey::new(key))
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }

    /// Get a text property.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.properties
            .get(&PropertyKey::new(key))
            .and_then(|v| v.as_text())
    }

    /// Append a child to the stack list, creating it if absent.
    pub(crate) fn push_child(&mut self, child: CardId) {
        self.stack.get_or_insert_with(StackChildren::new).push(child);
    }

    /// Remove a child from the stack list, dropping the list when it
    /// empties.
    pub(crate) fn remove_child(&mut self, child: CardId) {
        if let Some(stack) = self.stack.as_mut() {
            stack.retain(|&mut c| c != child);
            if stack.is_empty() {
                self.stack = None;
            }
        }
    }
}
