//! Helix Jump.
//!
//! A ball falls past a stack of rotating rings, each with a gap. Landing on
//! the solid part of the current ring bounces the ball and scores; dropping
//! through the gap keeps it falling. Falling off the bottom ends the run.

pub mod logic;
pub mod types;

pub use types::*;
