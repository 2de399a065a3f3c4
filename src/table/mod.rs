//! The table session: state, the move engine, and read-only queries.
//!
//! `Table` is defined in `state`; the move engine (`moves`) and query
//! surface (`queries`) extend it with the mutation and read APIs.

pub mod moves;
pub mod queries;
pub mod state;

pub use state::Table;
