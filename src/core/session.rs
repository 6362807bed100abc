//! Per-view session record: lifecycle state, score and tick cadence.

use super::constants::REALTIME_FRAME_MS;

/// Lifecycle of one mounted game view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Start,
    Playing,
    GameOver,
}

impl SessionState {
    pub fn label(self) -> &'static str {
        match self {
            SessionState::Start => "Ready",
            SessionState::Playing => "Playing",
            SessionState::GameOver => "Game Over",
        }
    }
}

/// How often the scheduling source should invoke `tick()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickInterval {
    /// Timer-driven at a fixed period.
    Fixed(u64),
    /// Display-synchronised; one tick per rendered frame.
    RenderDriven,
}

impl TickInterval {
    /// Period in milliseconds. Never zero.
    pub fn period_ms(self) -> u64 {
        match self {
            TickInterval::Fixed(ms) => ms.max(1),
            TickInterval::RenderDriven => REALTIME_FRAME_MS,
        }
    }
}

/// Exactly one per mounted game view. `run` increments on every `start()`
/// so that scheduling handles from an earlier run can be told apart.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: SessionState,
    pub score: u32,
    pub tick_interval: TickInterval,
    /// Ticks processed in the current run.
    pub ticks: u64,
    run: u64,
}

impl GameSession {
    pub fn new(tick_interval: TickInterval) -> Self {
        Self {
            state: SessionState::Start,
            score: 0,
            tick_interval,
            ticks: 0,
            run: 0,
        }
    }

    /// Reset to a fresh `playing` run.
    pub fn begin(&mut self) {
        self.state = SessionState::Playing;
        self.score = 0;
        self.ticks = 0;
        self.run += 1;
    }

    pub fn run(&self) -> u64 {
        self.run
    }

    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    /// Add points; only meaningful while playing, so the score never moves
    /// once the run has ended.
    pub fn add_score(&mut self, points: u32) {
        if self.is_playing() {
            self.score = self.score.saturating_add(points);
        }
    }

    pub fn end(&mut self) {
        self.state = SessionState::GameOver;
    }
}
