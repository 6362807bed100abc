//! Helix Jump logic: rotation, ball physics, ring bounces.

use super::types::*;
use crate::collision::{Aabb, CollisionRules, Contact, Verdict};
use crate::core::input::{Command, InputEffect};
use crate::core::render::{Paint, RenderSurface};
use crate::core::session::TickInterval;
use crate::core::world::World;
use rand::RngCore;
use std::f64::consts::TAU;

impl World for HelixWorld {
    fn name(&self) -> &'static str {
        "helix"
    }

    fn rules(&self) -> CollisionRules {
        CollisionRules::GapRing
    }

    fn tick_interval(&self) -> TickInterval {
        TickInterval::RenderDriven
    }

    fn field_size(&self) -> (f64, f64) {
        (self.config.field_width, self.config.field_height)
    }

    fn reset(&mut self) {
        let (cx, _) = self.config.centre();
        self.rotation = 0.0;
        self.level = 0;
        self.ball_x = cx;
        self.ball_y = self.config.ball_start_y;
        self.velocity = 0.0;
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
        self.ball_y += self.velocity;
        self.velocity += self.config.gravity;
    }

    /// Rotate the helix; the ball rides the current level's arc start.
    fn advance_obstacles(&mut self) {
        self.rotation += self.config.rotation_speed;
        let (cx, _) = self.config.centre();
        self.ball_x = cx + self.config.ring_radius * self.arc_start(self.level).cos();
    }

    fn contact(&self) -> Contact<'_> {
        // Open ceiling: only the bottom and sides bound the ball.
        let field = Aabb {
            left: 0.0,
            top: f64::NEG_INFINITY,
            right: self.config.field_width,
            bottom: self.config.field_height,
        };
        Contact::Ring {
            actor: self.ball(),
            theta: self.theta(),
            ring: self.ring(self.level),
            field,
        }
    }

    fn award(&mut self, verdict: Verdict, _rng: &mut dyn RngCore) -> u32 {
        if verdict != Verdict::Bounce {
            return 0;
        }
        self.velocity = self.config.jump_velocity;
        self.level += 1;
        log::debug!("helix: bounced onto level {}", self.level);
        1
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        let (cx, cy) = self.config.centre();
        let solid = TAU - self.config.hole_size;
        for level in 0..self.config.levels {
            let start = self.arc_start(level);
            let paint = if level == self.level {
                Paint::ActiveRing
            } else {
                Paint::Ring
            };
            surface.stroke_arc(cx, cy, self.config.ring_radius, start, start + solid, paint);
        }
        surface.fill_circle(self.ball_x, self.ball_y, self.config.ball_radius, Paint::Ball);
        surface.text(10.0, 20.0, "Press Space to Jump!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{ring_contact, RingContact};
    use crate::core::engine::{GameLoopEngine, InputOutcome, TickOutcome};
    use crate::core::render::DisplayList;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn started(config: HelixConfig) -> GameLoopEngine<HelixWorld> {
        let mut engine = GameLoopEngine::new(HelixWorld::new(config));
        engine.start();
        engine
    }

    fn run_to_end(engine: &mut GameLoopEngine<HelixWorld>) -> (u32, u64) {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10_000 {
            if let TickOutcome::GameOver { score } = engine.tick(&mut rng) {
                return (score, engine.session().ticks);
            }
        }
        panic!("helix never ended");
    }

    #[test]
    fn test_position_integrates_before_velocity() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = started(HelixConfig::default());
        engine.tick(&mut rng);
        assert_eq!(engine.world().ball_y, 50.0);
        assert!((engine.world().velocity - 0.2).abs() < 1e-12);
        engine.tick(&mut rng);
        assert!((engine.world().ball_y - 50.2).abs() < 1e-12);
    }

    #[test]
    fn test_ball_rides_arc_start() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = started(HelixConfig::default());
        engine.tick(&mut rng);
        let expected = 200.0 + 150.0 * 0.02_f64.cos();
        assert!((engine.world().ball_x - expected).abs() < 1e-9);
    }

    #[test]
    fn test_ring_layout() {
        let world = HelixWorld::new(HelixConfig::default());
        assert_eq!(world.ring_y(0), 600.0);
        assert_eq!(world.ring_y(9), 150.0);
        assert!(world.ring(9).is_some());
        assert_eq!(world.ring(10), None);
        let ring = world.ring(0).unwrap();
        assert_eq!(ring.band, 15.0);
        assert!((ring.gap_start - (TAU - std::f64::consts::PI / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_falling_through_gap_ends_game_without_score() {
        // Whole ring is gap: the ball drops straight through the bottom.
        let config = HelixConfig {
            hole_size: TAU,
            ..HelixConfig::default()
        };
        let mut engine = started(config);
        let (score, _) = run_to_end(&mut engine);
        assert_eq!(score, 0);
        assert_eq!(engine.world().level, 0);
        assert!(engine.world().ball_y - 10.0 >= 600.0);
    }

    #[test]
    fn test_solid_ring_bounces_and_scores() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = HelixConfig {
            hole_size: 0.0,
            ..HelixConfig::default()
        };
        let mut engine = started(config);
        let mut bounced = false;
        for _ in 0..200 {
            engine.tick(&mut rng);
            if engine.score() == 1 {
                bounced = true;
                break;
            }
        }
        assert!(bounced);
        assert_eq!(engine.world().level, 1);
        assert_eq!(engine.world().velocity, -8.0);
    }

    #[test]
    fn test_gap_contact_is_clear() {
        let mut world = HelixWorld::new(HelixConfig::default());
        world.ball_y = 595.0;
        let ring = world.ring(0).unwrap();
        // Pick the ball angle in the middle of the gap.
        let theta = ring.gap_start + ring.gap_size / 2.0;
        assert_eq!(ring_contact(world.ball_y, theta, &ring), RingContact::Gap);
        assert_eq!(
            ring_contact(world.ball_y, ring.gap_start - 0.5, &ring),
            RingContact::Solid
        );
        world.ball_y = 560.0;
        assert_eq!(ring_contact(world.ball_y, theta, &ring), RingContact::OutsideBand);
    }

    #[test]
    fn test_no_ceiling() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = started(HelixConfig::default());
        engine.world_mut().ball_y = -500.0;
        assert_eq!(engine.tick(&mut rng), TickOutcome::Continue);
    }

    #[test]
    fn test_past_last_ring_only_falls() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = started(HelixConfig::default());
        engine.world_mut().level = 10;
        engine.world_mut().ball_y = 595.0;
        assert_eq!(engine.tick(&mut rng), TickOutcome::Continue);
        let (score, _) = run_to_end(&mut engine);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_jump_applies_velocity() {
        let mut engine = started(HelixConfig::default());
        assert_eq!(engine.handle_input(Command::Jump), InputOutcome::Applied);
        assert_eq!(engine.world().velocity, -8.0);
        assert_eq!(engine.handle_input(Command::Left), InputOutcome::Ignored);
    }

    #[test]
    fn test_draw() {
        let world = HelixWorld::new(HelixConfig::default());
        let mut list = DisplayList::new(400.0, 600.0);
        world.draw(&mut list);
        assert_eq!(list.count_paint(Paint::ActiveRing), 1);
        assert_eq!(list.count_paint(Paint::Ring), 9);
        assert_eq!(list.count_paint(Paint::Ball), 1);
    }
}
