//! Grid snake.
//!
//! The snake steps one cell per fixed tick in its current direction. Eating
//! the apple grows it by one segment and relocates the apple to a free cell.
//! Leaving the grid or running into its own body ends the run.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
