//! Helix Jump data structures.

use crate::collision::{Circle, Ring};
use crate::core::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelixConfig {
    pub field_width: f64,
    pub field_height: f64,
    pub ball_radius: f64,
    pub ball_start_y: f64,
    pub gravity: f64,
    /// Velocity set by a jump or a bounce (negative is up).
    pub jump_velocity: f64,
    /// Radians per frame.
    pub rotation_speed: f64,
    pub levels: u32,
    pub level_height: f64,
    pub ring_radius: f64,
    /// Angular size of the gap in each ring.
    pub hole_size: f64,
    /// Extra rotation applied per level.
    pub level_twist: f64,
    /// Ring half-thickness added to the ball radius for the hit band.
    pub band: f64,
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ball_radius: 10.0,
            ball_start_y: 50.0,
            gravity: 0.2,
            jump_velocity: -8.0,
            rotation_speed: 0.02,
            levels: 10,
            level_height: 50.0,
            ring_radius: 150.0,
            hole_size: PI / 3.0,
            level_twist: PI / 4.0,
            band: 5.0,
        }
    }
}

impl HelixConfig {
    pub fn centre(&self) -> (f64, f64) {
        (self.field_width / 2.0, self.field_height / 2.0)
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct HelixWorld {
    pub config: HelixConfig,
    /// Helix rotation in radians.
    pub rotation: f64,
    /// Index of the ring the ball is heading for.
    pub level: u32,
    pub ball_x: f64,
    pub ball_y: f64,
    pub velocity: f64,
}

impl HelixWorld {
    pub fn new(config: HelixConfig) -> Self {
        let (cx, _) = config.centre();
        Self {
            ball_x: cx,
            ball_y: config.ball_start_y,
            config,
            rotation: 0.0,
            level: 0,
            velocity: 0.0,
        }
    }

    pub fn ball(&self) -> Circle {
        Circle {
            x: self.ball_x,
            y: self.ball_y,
            radius: self.config.ball_radius,
        }
    }

    /// Angle where the solid arc of ring `level` begins.
    pub fn arc_start(&self, level: u32) -> f64 {
        self.rotation + f64::from(level) * self.config.level_twist
    }

    pub fn ring_y(&self, level: u32) -> f64 {
        self.config.field_height - f64::from(level) * self.config.level_height
    }

    /// The ring at `level`; the gap follows the solid arc.
    pub fn ring(&self, level: u32) -> Option<Ring> {
        if level >= self.config.levels {
            return None;
        }
        Some(Ring {
            y: self.ring_y(level),
            gap_start: self.arc_start(level) + TAU - self.config.hole_size,
            gap_size: self.config.hole_size,
            band: self.config.ball_radius + self.config.band,
        })
    }

    /// Ball angle around the helix centre.
    pub fn theta(&self) -> f64 {
        let (cx, cy) = self.config.centre();
        (self.ball_y - cy).atan2(self.ball_x - cx)
    }
}
