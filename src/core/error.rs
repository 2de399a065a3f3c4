//! Engine errors.
//!
//! Two families, matching how they are recovered from:
//!
//! - `SetupError`: configuration mistakes (duplicate registrations, bad
//!   pile names, unknown types). These surface at library/game setup time
//!   and indicate a bug in the rules or library definition.
//! - `MoveError`: illegal moves rejected before any mutation. Only
//!   self-stacking is a hard error; cycle-violating inserts are reported
//!   via `tracing` and treated as no-ops, since rule logic can trigger
//!   them indirectly from unexpected player input.
//!
//! Empty or not-found *queries* are never errors — they return `None`.

use crate::core::ids::CardId;

/// Configuration errors raised during library or game setup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// A card type with this id is already registered.
    #[error("card type '{type_id}' is already registered")]
    DuplicateType {
        /// The conflicting type id.
        type_id: String,
    },

    /// A library group with this id already exists.
    #[error("card group '{group_id}' already exists")]
    DuplicateGroup {
        /// The conflicting group id.
        group_id: String,
    },

    /// A pile with this id already exists.
    #[error("pile '{pile_id}' already exists")]
    DuplicatePile {
        /// The conflicting pile id.
        pile_id: String,
    },

    /// Pile ids may not start with '.' or be "*" (reserved for settings
    /// resolution).
    #[error("'{pile_id}' is not a valid pile id (may not start with '.' or be \"*\")")]
    InvalidPileId {
        /// The rejected pile id.
        pile_id: String,
    },

    /// No card type with this id is registered.
    #[error("no card type '{type_id}' is registered")]
    UnknownType {
        /// The unknown type id.
        type_id: String,
    },
}

/// Illegal moves rejected before any state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// A card cannot be stacked onto itself.
    #[error("cannot stack {card} onto itself")]
    SelfStack {
        /// The offending card.
        card: CardId,
    },
}
