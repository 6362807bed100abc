//! Cooperative scheduling source with explicit start/cancel handles.
//!
//! The host feeds wall-clock time into [`FrameScheduler::advance`] and gets
//! back at most one due tick per call. Once a handle is cancelled, or
//! replaced by a later `start_loop`, no further tick is ever reported for it.

use super::constants::MAX_FRAME_DT_MS;
use super::session::{GameSession, TickInterval};
use std::time::{Duration, Instant};

/// Identifies one scheduled loop for one session run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopHandle {
    id: u64,
    run: u64,
}

impl LoopHandle {
    /// The session run this loop was started for.
    pub fn run(&self) -> u64 {
        self.run
    }
}

#[derive(Debug, Clone)]
struct ActiveLoop {
    handle: LoopHandle,
    period_ms: u64,
    accumulated_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    next_id: u64,
    active: Option<ActiveLoop>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin ticking `session` at its cadence. Any running loop is cancelled first.
    pub fn start_loop(&mut self, session: &GameSession) -> LoopHandle {
        if let Some(previous) = self.active.take() {
            log::debug!("loop {} replaced", previous.handle.id);
        }
        self.next_id += 1;
        let handle = LoopHandle {
            id: self.next_id,
            run: session.run(),
        };
        self.active = Some(ActiveLoop {
            handle,
            period_ms: session.tick_interval.period_ms(),
            accumulated_ms: 0,
        });
        handle
    }

    /// Stop `handle`. Returns false if it was not the running loop.
    pub fn cancel(&mut self, handle: LoopHandle) -> bool {
        match &self.active {
            Some(active) if active.handle == handle => {
                self.active = None;
                log::debug!("loop {} cancelled", handle.id);
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self, handle: &LoopHandle) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.handle == *handle)
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Feed `dt_ms` of elapsed time. Returns the running handle when a tick
    /// is due. Overdue time beyond one period is dropped, so a stall never
    /// produces a burst of catch-up ticks.
    pub fn advance(&mut self, dt_ms: u64) -> Option<LoopHandle> {
        let active = self.active.as_mut()?;
        active.accumulated_ms += dt_ms.min(MAX_FRAME_DT_MS);
        if active.accumulated_ms < active.period_ms {
            return None;
        }
        active.accumulated_ms = (active.accumulated_ms - active.period_ms).min(active.period_ms);
        Some(active.handle)
    }

    /// Time left before the next tick, `None` when nothing is scheduled.
    pub fn time_until_due(&self) -> Option<Duration> {
        self.active.as_ref().map(|active| {
            Duration::from_millis(active.period_ms.saturating_sub(active.accumulated_ms))
        })
    }

    /// Cadence of the running loop.
    pub fn interval(&self) -> Option<TickInterval> {
        self.active
            .as_ref()
            .map(|active| TickInterval::Fixed(active.period_ms))
    }
}

/// Turns wall-clock instants into whole-millisecond steps for
/// [`FrameScheduler::advance`]. Sub-millisecond remainders carry over.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Whole milliseconds since the last call.
    pub fn elapsed_ms(&mut self, now: Instant) -> u64 {
        let ms = now.saturating_duration_since(self.last).as_millis() as u64;
        self.last += Duration::from_millis(ms);
        ms
    }
}
