//! Per-game hooks driven by the generic engine.

use super::input::{Command, InputEffect};
use super::render::RenderSurface;
use super::session::TickInterval;
use crate::collision::{CollisionRules, Contact, Verdict};
use rand::RngCore;

/// What a command does while the session is not `playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartPolicy {
    /// The primary action (Jump) starts a new run.
    PrimaryAction,
    /// Only an explicit `start()` does; commands are ignored.
    Explicit,
}

/// Entity state and physics of one game.
///
/// `GameLoopEngine::tick` calls the hooks in this order on every tick:
/// `integrate`, `advance_obstacles`, `spawn`, `contact` (checked against
/// `rules`), `award` (skipped on a terminal verdict), `prune`.
pub trait World {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn rules(&self) -> CollisionRules;

    fn tick_interval(&self) -> TickInterval;

    fn restart_policy(&self) -> RestartPolicy {
        RestartPolicy::Explicit
    }

    /// Playfield size in draw units.
    fn field_size(&self) -> (f64, f64);

    /// Restore the documented initial configuration.
    fn reset(&mut self);

    /// Input while playing. Must not touch positions.
    fn on_command(&mut self, command: Command) -> InputEffect;

    /// (a) Apply velocities and the sampled latch to the actor.
    fn integrate(&mut self, latched: Option<Command>);

    /// (b) Move obstacles.
    fn advance_obstacles(&mut self) {}

    /// (c) Append obstacles when the spawn predicate holds.
    fn spawn(&mut self, _rng: &mut dyn RngCore) {}

    /// (d) Snapshot of the entities the rules need.
    fn contact(&self) -> Contact<'_>;

    /// (e) React to a non-terminal verdict; returns points earned.
    fn award(&mut self, verdict: Verdict, rng: &mut dyn RngCore) -> u32;

    /// (f) Drop obstacles that left the screen.
    fn prune(&mut self) {}

    fn draw(&self, surface: &mut dyn RenderSurface);
}
