//! Speed Racer logic: latched steering, falling obstacles, scoring.

use super::types::*;
use crate::collision::{Aabb, CollisionRules, Contact, EdgePolicy, Verdict};
use crate::core::input::{Command, InputEffect};
use crate::core::render::{Paint, RenderSurface};
use crate::core::session::TickInterval;
use crate::core::spawn::uniform_in;
use crate::core::world::World;
use rand::RngCore;

impl World for RacerWorld {
    fn name(&self) -> &'static str {
        "racer"
    }

    fn rules(&self) -> CollisionRules {
        CollisionRules::Rectangular {
            edges: EdgePolicy::Exit,
        }
    }

    fn tick_interval(&self) -> TickInterval {
        TickInterval::RenderDriven
    }

    fn field_size(&self) -> (f64, f64) {
        (self.config.field_width, self.config.field_height)
    }

    fn reset(&mut self) {
        self.car_x = self.config.car_start_x();
        self.obstacles.clear();
    }

    fn on_command(&mut self, command: Command) -> InputEffect {
        match command {
            Command::Left | Command::Right => InputEffect::Latch,
            _ => InputEffect::Ignored,
        }
    }

    fn integrate(&mut self, latched: Option<Command>) {
        let step = match latched {
            Some(Command::Left) => -self.config.steer_step,
            Some(Command::Right) => self.config.steer_step,
            _ => return,
        };
        let max_x = (self.config.field_width - self.config.car_width).max(0.0);
        self.car_x = (self.car_x + step).clamp(0.0, max_x);
    }

    fn advance_obstacles(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.y += self.config.obstacle_speed;
        }
    }

    fn spawn(&mut self, rng: &mut dyn RngCore) {
        let cfg = &self.config;
        let newest = self.obstacles.last().map(|o| o.y);
        if !cfg.spawn.should_spawn(newest, -cfg.obstacle_height, rng) {
            return;
        }
        let x = uniform_in(rng, 0.0, cfg.field_width - cfg.obstacle_width);
        self.obstacles.push(Obstacle {
            x,
            y: -cfg.obstacle_height,
        });
    }

    fn contact(&self) -> Contact<'_> {
        Contact::Boxes {
            actor: self.car(),
            obstacles: self.obstacles.iter().map(|o| self.obstacle_box(o)).collect(),
            field: Aabb::new(0.0, 0.0, self.config.field_width, self.config.field_height),
        }
    }

    fn award(&mut self, _verdict: Verdict, _rng: &mut dyn RngCore) -> u32 {
        let cleared = self
            .obstacles
            .iter()
            .filter(|o| self.is_below_road(o))
            .count();
        cleared as u32
    }

    fn prune(&mut self) {
        let limit = self.config.field_height;
        self.obstacles.retain(|o| o.y <= limit);
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        let cfg = &self.config;
        surface.fill_rect(Aabb::new(0.0, 0.0, cfg.field_width, cfg.field_height), Paint::Road);
        surface.fill_rect(self.car(), Paint::Car);
        for obstacle in &self.obstacles {
            surface.fill_rect(self.obstacle_box(obstacle), Paint::Obstacle);
        }
    }
}
