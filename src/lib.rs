//! # cardtable
//!
//! An in-memory card-table state engine: card libraries, ordered piles,
//! tree-structured stacking between cards, and a move engine that keeps
//! all three mutually consistent under player-driven mutation.
//!
//! ## Design Principles
//!
//! 1. **State, not rules**: The engine tracks where cards are and how they
//!    stack. What is *legal* is decided by externally-supplied `GameRules`.
//!
//! 2. **One writer**: Only the move engine mutates pile membership and
//!    stacking links, so the bidirectional invariants (card ↔ pile item
//!    list, parent pointer ↔ child list) hold after every operation.
//!
//! 3. **Session-owned state**: Ids, RNG, cards and piles all live on the
//!    `Table`. Two sessions in one process share nothing.
//!
//! ## Modules
//!
//! - `core`: Card ids, the session RNG, error types
//! - `library`: Card templates, properties, frozen groups
//! - `cards`: Card instances, the instance arena, the stacking forest
//! - `piles`: Named ordered piles and pile groups
//! - `table`: The session - move engine and query surface
//! - `rules`: The `GameRules` trait games implement
//! - `settings`: Individual/group/wildcard override resolution

pub mod cards;
pub mod core;
pub mod library;
pub mod piles;
pub mod rules;
pub mod settings;
pub mod table;

// Re-export commonly used types
pub use crate::core::{CardId, GameRng, IdAllocator, MoveError, SetupError};

pub use crate::library::{
    CardGroup, CardLibrary, CardTemplate, FaceTemplate, GroupId, Properties, PropertyKey,
    PropertyValue, TypeId,
};

pub use crate::cards::{CardInstance, CardStore};

pub use crate::piles::{PileId, PileStore};

pub use crate::table::Table;

pub use crate::rules::{CleanupFn, GameRules, PlayTarget, Playable, PrepFn};

pub use crate::settings::SettingsResolver;
