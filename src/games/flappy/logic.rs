//! Flappy Bird logic: gravity, flaps, pipe scrolling and scoring.

use super::types::*;
use crate::collision::{CollisionRules, Contact, EdgePolicy, Verdict};
use crate::core::input::{Command, InputEffect};
use crate::core::render::{Paint, RenderSurface};
use crate::core::session::TickInterval;
use crate::core::spawn::uniform_in;
use crate::core::world::{RestartPolicy, World};
use rand::RngCore;

impl World for FlappyWorld {
    fn name(&self) -> &'static str {
        "flappy"
    }

    fn rules(&self) -> CollisionRules {
        CollisionRules::Rectangular {
            edges: EdgePolicy::Touch,
        }
    }

    fn tick_interval(&self) -> TickInterval {
        TickInterval::RenderDriven
    }

    fn restart_policy(&self) -> RestartPolicy {
        RestartPolicy::PrimaryAction
    }

    fn field_size(&self) -> (f64, f64) {
        (self.config.field_width, self.config.field_height)
    }

    fn reset(&mut self) {
        self.bird_y = self.config.field_height / 2.0;
        self.velocity = 0.0;
        self.pipes.clear();
    }

    fn on_command(&mut self, command: Command) -> InputEffect {
        match command {
            Command::Jump | Command::Up => {
                self.velocity = self.config.jump_velocity;
                InputEffect::Applied
            }
            _ => InputEffect::Ignored,
        }
    }

    fn integrate(&mut self, _latched: Option<Command>) {
        self.velocity += self.config.gravity;
        self.bird_y += self.velocity;
    }

    fn advance_obstacles(&mut self) {
        for pipe in &mut self.pipes {
            pipe.x -= self.config.pipe_speed;
        }
    }

    fn spawn(&mut self, rng: &mut dyn RngCore) {
        let cfg = &self.config;
        let newest = self.pipes.last().map(|p| p.x);
        if !cfg.spawn.should_spawn(newest, cfg.field_width, rng) {
            return;
        }
        let span = cfg.field_height - cfg.pipe_gap - 2.0 * cfg.pipe_margin;
        let top = uniform_in(rng, cfg.pipe_margin, span);
        self.pipes.push(Pipe {
            x: cfg.field_width,
            top,
            bottom: top + cfg.pipe_gap,
            passed: false,
        });
    }

    fn contact(&self) -> Contact<'_> {
        let cfg = &self.config;
        let obstacles = self
            .pipes
            .iter()
            .flat_map(|p| [p.upper(cfg.pipe_width), p.lower(cfg.pipe_width, cfg.field_height)])
            .collect();
        Contact::Boxes {
            actor: self.bird(),
            obstacles,
            field: self.field(),
        }
    }

    fn award(&mut self, _verdict: Verdict, _rng: &mut dyn RngCore) -> u32 {
        let (width, bird_x) = (self.config.pipe_width, self.config.bird_x);
        let mut points = 0;
        for pipe in self.pipes.iter_mut().filter(|p| !p.passed) {
            if pipe.x + width < bird_x {
                pipe.passed = true;
                points += 1;
            }
        }
        points
    }

    fn prune(&mut self) {
        let width = self.config.pipe_width;
        self.pipes.retain(|p| p.x >= -width);
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        let cfg = &self.config;
        for pipe in &self.pipes {
            surface.fill_rect(pipe.upper(cfg.pipe_width), Paint::Pipe);
            surface.fill_rect(pipe.lower(cfg.pipe_width, cfg.field_height), Paint::Pipe);
        }
        let radius = cfg.bird_width / 2.0;
        surface.fill_circle(
            cfg.bird_x + radius,
            self.bird_y + cfg.bird_height / 2.0,
            radius,
            Paint::Bird,
        );
    }
}
