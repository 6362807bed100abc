//! Pairs one engine with its scheduling source for the lifetime of a view.

use super::engine::{GameLoopEngine, InputOutcome, TickOutcome};
use super::input::Command;
use super::render::RenderSurface;
use super::schedule::{FrameScheduler, LoopHandle};
use super::world::World;
use rand::RngCore;
use std::time::Duration;

/// Mounted game view: created on mount, dropped on unmount.
#[derive(Debug)]
pub struct GameRunner<W: World> {
    engine: GameLoopEngine<W>,
    scheduler: FrameScheduler,
    handle: Option<LoopHandle>,
}

impl<W: World> GameRunner<W> {
    pub fn new(world: W) -> Self {
        Self {
            engine: GameLoopEngine::new(world),
            scheduler: FrameScheduler::new(),
            handle: None,
        }
    }

    /// `start()` plus a fresh loop. The previous loop, if any, is cancelled.
    pub fn start(&mut self) {
        self.cancel_loop();
        self.engine.start();
        self.handle = Some(self.scheduler.start_loop(self.engine.session()));
    }

    /// Deterministically stop the scheduling source (unmount).
    pub fn stop(&mut self) {
        self.cancel_loop();
    }

    /// Forward input. A restart triggered by input also restarts the loop.
    pub fn handle_input(&mut self, command: Command) -> InputOutcome {
        let outcome = self.engine.handle_input(command);
        if outcome == InputOutcome::Restarted {
            self.cancel_loop();
            self.handle = Some(self.scheduler.start_loop(self.engine.session()));
        }
        outcome
    }

    /// Feed elapsed time; runs at most one tick. Returns `None` when no tick
    /// was due or the due tick belonged to a stale loop.
    pub fn pump<R: RngCore>(&mut self, dt_ms: u64, rng: &mut R) -> Option<TickOutcome> {
        let due = self.scheduler.advance(dt_ms)?;
        if self.handle != Some(due) || due.run() != self.engine.session().run() {
            log::warn!("discarding tick for stale loop (run {})", due.run());
            self.scheduler.cancel(due);
            return None;
        }

        let outcome = self.engine.tick(rng);
        match outcome {
            TickOutcome::GameOver { .. } | TickOutcome::Idle => self.cancel_loop(),
            TickOutcome::Continue => {}
        }
        Some(outcome)
    }

    pub fn is_scheduled(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| self.scheduler.is_active(handle))
    }

    pub fn time_until_due(&self) -> Option<Duration> {
        self.scheduler.time_until_due()
    }

    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        self.engine.draw(surface);
    }

    pub fn engine(&self) -> &GameLoopEngine<W> {
        &self.engine
    }

    fn cancel_loop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<W: World> Drop for GameRunner<W> {
    fn drop(&mut self) {
        self.cancel_loop();
    }
}
