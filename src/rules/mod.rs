//! The rules boundary: the trait games implement and its tagged verdicts.

pub mod engine;

pub use engine::{CleanupFn, GameRules, PlayTarget, Playable, PrepFn};
