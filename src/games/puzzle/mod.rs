//! Puzzle Mania: a number sorting puzzle.
//!
//! Not a real-time game. A few distinct numbers are shown in random order
//! and the player enters them in ascending order.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
