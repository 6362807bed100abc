//! Flappy Bird.
//!
//! Gravity pulls the bird down every frame and a flap resets its velocity.
//! Pipe pairs scroll in from the right; passing one scores a point, touching
//! one or leaving the screen vertically ends the run.

pub mod logic;
pub mod types;

pub use types::*;
