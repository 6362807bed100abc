//! Generic real-time game loop: one session from `start` through repeated
//! `playing` ticks to `gameover`.
//!
//! The engine owns the [`GameSession`], the game's [`World`] and the
//! [`InputLatch`]. It never schedules itself; a scheduling source (see
//! [`super::runner::GameRunner`]) calls [`GameLoopEngine::tick`] once per
//! frame and stops when the outcome is [`TickOutcome::GameOver`].

use super::input::{Command, InputEffect, InputLatch};
use super::render::RenderSurface;
use super::session::{GameSession, SessionState};
use super::world::{RestartPolicy, World};
use rand::RngCore;

/// Result of a single `tick()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing was updated.
    Idle,
    /// Request the next tick.
    Continue,
    /// Terminal condition reached; stop scheduling.
    GameOver { score: u32 },
}

/// Result of `handle_input()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Latched,
    Applied,
    Restarted,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct GameLoopEngine<W: World> {
    session: GameSession,
    world: W,
    latch: InputLatch,
}

impl<W: World> GameLoopEngine<W> {
    /// Create the session for a freshly mounted view, waiting in `start`.
    pub fn new(mut world: W) -> Self {
        world.reset();
        Self {
            session: GameSession::new(world.tick_interval()),
            world,
            latch: InputLatch::new(),
        }
    }

    /// Reset actors, obstacles and score and enter `playing`. Safe from any state.
    pub fn start(&mut self) {
        self.world.reset();
        self.latch.clear();
        self.session.tick_interval = self.world.tick_interval();
        self.session.begin();
        log::info!(
            "{}: run {} started ({} ms cadence)",
            self.world.name(),
            self.session.run(),
            self.session.tick_interval.period_ms()
        );
    }

    /// Accept a command at any time. Never runs tick logic.
    pub fn handle_input(&mut self, command: Command) -> InputOutcome {
        if !self.session.is_playing() {
            return match self.world.restart_policy() {
                RestartPolicy::PrimaryAction if command.is_primary() => {
                    self.start();
                    InputOutcome::Restarted
                }
                _ => InputOutcome::Ignored,
            };
        }

        match self.world.on_command(command) {
            InputEffect::Latch => {
                self.latch.latch(command);
                InputOutcome::Latched
            }
            InputEffect::Applied => InputOutcome::Applied,
            InputEffect::Ignored => InputOutcome::Ignored,
        }
    }

    /// Single-frame update. Does nothing unless `playing`.
    pub fn tick<R: RngCore>(&mut self, rng: &mut R) -> TickOutcome {
        if !self.session.is_playing() {
            return TickOutcome::Idle;
        }
        self.session.ticks += 1;

        let latched = self.latch.take();
        self.world.integrate(latched);
        self.world.advance_obstacles();
        self.world.spawn(rng);

        let verdict = self.world.rules().check(&self.world.contact());

        if !verdict.is_terminal() {
            let points = self.world.award(verdict, rng);
            self.session.add_score(points);
        }

        self.world.prune();

        if verdict.is_terminal() {
            self.session.end();
            log::info!(
                "{}: run {} over after {} ticks, score {}",
                self.world.name(),
                self.session.run(),
                self.session.ticks,
                self.session.score
            );
            TickOutcome::GameOver {
                score: self.session.score,
            }
        } else {
            TickOutcome::Continue
        }
    }

    /// Paint the current frame. Takes `&self`, so it cannot interleave with a tick.
    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        surface.clear();
        self.world.draw(surface);
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    /// Direct world access for scenario setup in tests and tools.
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn pending_input(&self) -> Option<Command> {
        self.latch.peek()
    }
}
