//! Core building blocks: card ids, the session RNG, and error types.

pub mod error;
pub mod ids;
pub mod rng;

pub use error::{MoveError, SetupError};
pub use ids::{CardId, IdAllocator};
pub use rng::GameRng;
