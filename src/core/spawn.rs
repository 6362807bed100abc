//! Obstacle spawn policies and placement sampling.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// When a new obstacle enters the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Spawn once the newest obstacle has travelled more than `distance`
    /// away from the spawn edge (or when there is none).
    Spacing { distance: f64 },
    /// Spawn with a fixed probability on every tick.
    Chance { per_tick: f64 },
}

impl SpawnPolicy {
    /// `newest` is the position of the most recently spawned obstacle along
    /// the direction of travel; `spawn_edge` is where new ones appear.
    pub fn should_spawn(&self, newest: Option<f64>, spawn_edge: f64, rng: &mut dyn RngCore) -> bool {
        match *self {
            SpawnPolicy::Spacing { distance } => match newest {
                None => true,
                Some(pos) => (spawn_edge - pos).abs() > distance,
            },
            // Comparing a uniform draw keeps out-of-range probabilities total.
            SpawnPolicy::Chance { per_tick } => rng.gen::<f64>() < per_tick,
        }
    }
}

/// Uniform draw in `[lo, lo + span)`. A collapsed or invalid span yields `lo`.
pub fn uniform_in(rng: &mut dyn RngCore, lo: f64, span: f64) -> f64 {
    if span > 0.0 && span.is_finite() {
        lo + rng.gen::<f64>() * span
    } else {
        lo
    }
}

/// Rejection sampling: call `draw` until it yields a value that is not
/// occupied. Returns the accepted value and the number of draws taken, or
/// `None` after `max_attempts` rejections.
pub fn rejection_sample<T, D, O>(mut draw: D, is_occupied: O, max_attempts: usize) -> Option<(T, usize)>
where
    T: Copy,
    D: FnMut() -> T,
    O: Fn(T) -> bool,
{
    for attempt in 1..=max_attempts {
        let candidate = draw();
        if !is_occupied(candidate) {
            return Some((candidate, attempt));
        }
    }
    None
}
