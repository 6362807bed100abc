//! Speed Racer data structures.

use crate::collision::Aabb;
use crate::core::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::core::spawn::SpawnPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RacerConfig {
    pub field_width: f64,
    pub field_height: f64,
    pub car_width: f64,
    pub car_height: f64,
    /// Gap between the car and the bottom edge.
    pub car_margin: f64,
    /// Pixels per steering command.
    pub steer_step: f64,
    pub obstacle_width: f64,
    pub obstacle_height: f64,
    /// Pixels per frame.
    pub obstacle_speed: f64,
    pub spawn: SpawnPolicy,
}

impl Default for RacerConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            car_width: 50.0,
            car_height: 80.0,
            car_margin: 20.0,
            steer_step: 10.0,
            obstacle_width: 30.0,
            obstacle_height: 50.0,
            obstacle_speed: 5.0,
            spawn: SpawnPolicy::Chance { per_tick: 0.02 },
        }
    }
}

impl RacerConfig {
    pub fn car_start_x(&self) -> f64 {
        self.field_width / 2.0 - self.car_width / 2.0
    }

    pub fn car_y(&self) -> f64 {
        self.field_height - self.car_height - self.car_margin
    }
}

/// A falling block. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct RacerWorld {
    pub config: RacerConfig,
    pub car_x: f64,
    /// Oldest first.
    pub obstacles: Vec<Obstacle>,
}

impl RacerWorld {
    pub fn new(config: RacerConfig) -> Self {
        Self {
            car_x: config.car_start_x(),
            config,
            obstacles: Vec::new(),
        }
    }

    pub fn car(&self) -> Aabb {
        Aabb::new(
            self.car_x,
            self.config.car_y(),
            self.config.car_width,
            self.config.car_height,
        )
    }

    pub fn obstacle_box(&self, obstacle: &Obstacle) -> Aabb {
        Aabb::new(
            obstacle.x,
            obstacle.y,
            self.config.obstacle_width,
            self.config.obstacle_height,
        )
    }

    pub(super) fn is_below_road(&self, obstacle: &Obstacle) -> bool {
        obstacle.y > self.config.field_height
    }
}
