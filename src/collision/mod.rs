//! Collision rules: pure predicates over actor/obstacle positions.
//!
//! - Axis-aligned box overlap (vehicle/obstacle, bird/pipe)
//! - Circular gap passage (helix rings)
//! - Playfield boundary exit
//! - Self-occupancy on a grid (snake)

pub mod rules;
pub mod shapes;

pub use rules::*;
pub use shapes::*;
