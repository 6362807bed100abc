//! Discrete player commands and the per-tick input latch.

/// UI-agnostic command delivered by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flap / hop / primary action (Space).
    Jump,
    Up,
    Down,
    Left,
    Right,
}

impl Command {
    /// True for the command that doubles as "start" on the waiting screens.
    pub fn is_primary(self) -> bool {
        matches!(self, Command::Jump)
    }
}

/// What a world did with a command while `playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEffect {
    /// Store in the latch; the world samples it on the next tick.
    Latch,
    /// Already applied (velocity impulse).
    Applied,
    /// Not meaningful for this game.
    Ignored,
}

/// Last-registered command, sampled once per tick.
///
/// Not a queue: a newer command overwrites an unsampled one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    latest: Option<Command>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latch(&mut self, command: Command) {
        self.latest = Some(command);
    }

    /// Sample and clear.
    pub fn take(&mut self) -> Option<Command> {
        self.latest.take()
    }

    pub fn peek(&self) -> Option<Command> {
        self.latest
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }
}
