//! Flappy Bird data structures.

use crate::collision::Aabb;
use crate::core::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::core::spawn::SpawnPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlappyConfig {
    pub field_width: f64,
    pub field_height: f64,
    /// Fixed left edge of the bird box.
    pub bird_x: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    /// Velocity added every frame.
    pub gravity: f64,
    /// Velocity set by a flap (negative is up).
    pub jump_velocity: f64,
    pub pipe_width: f64,
    pub pipe_gap: f64,
    /// Pixels per frame.
    pub pipe_speed: f64,
    /// Minimum pipe length above and below the gap.
    pub pipe_margin: f64,
    pub spawn: SpawnPolicy,
}

impl Default for FlappyConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            bird_x: 50.0,
            bird_width: 50.0,
            bird_height: 35.0,
            gravity: 0.5,
            jump_velocity: -10.0,
            pipe_width: 60.0,
            pipe_gap: 150.0,
            pipe_speed: 2.0,
            pipe_margin: 50.0,
            spawn: SpawnPolicy::Spacing { distance: 200.0 },
        }
    }
}

/// A pipe pair: solid above `top` and below `bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub x: f64,
    pub top: f64,
    pub bottom: f64,
    pub passed: bool,
}

impl Pipe {
    pub fn upper(&self, width: f64) -> Aabb {
        Aabb::new(self.x, 0.0, width, self.top)
    }

    pub fn lower(&self, width: f64, field_height: f64) -> Aabb {
        Aabb::new(self.x, self.bottom, width, field_height - self.bottom)
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyWorld {
    pub config: FlappyConfig,
    /// Top edge of the bird box.
    pub bird_y: f64,
    pub velocity: f64,
    /// Ordered by spawn time, which is also left-to-right.
    pub pipes: Vec<Pipe>,
}

impl FlappyWorld {
    pub fn new(config: FlappyConfig) -> Self {
        let bird_y = config.field_height / 2.0;
        Self {
            config,
            bird_y,
            velocity: 0.0,
            pipes: Vec::new(),
        }
    }

    pub fn bird(&self) -> Aabb {
        Aabb::new(
            self.config.bird_x,
            self.bird_y,
            self.config.bird_width,
            self.config.bird_height,
        )
    }

    pub fn field(&self) -> Aabb {
        Aabb::new(0.0, 0.0, self.config.field_width, self.config.field_height)
    }
}
