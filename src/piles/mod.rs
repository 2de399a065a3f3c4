//! Named ordered piles and pile groups.

pub mod store;

pub use store::{PileId, PileStore};
