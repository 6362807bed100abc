//! Speed Racer.
//!
//! The car sits at the bottom of the road and steers left or right while
//! obstacles fall toward it. Every obstacle that leaves the bottom scores.

pub mod logic;
pub mod types;

pub use types::*;
