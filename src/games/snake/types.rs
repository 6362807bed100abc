//! Snake data structures and tunables.

use crate::collision::{Cell, GridSize};
use crate::core::constants::{SNAKE_CELL_PX, SNAKE_TICK_MS};
use crate::core::input::Command;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn from_command(command: Command) -> Option<Self> {
        match command {
            Command::Up => Some(Self::Up),
            Command::Down => Some(Self::Down),
            Command::Left => Some(Self::Left),
            Command::Right => Some(Self::Right),
            Command::Jump => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    pub grid_width: i16,
    pub grid_height: i16,
    /// Draw units per cell.
    pub cell_px: f64,
    pub tick_ms: u64,
    /// Initial body, head first.
    pub start_body: Vec<Cell>,
    pub start_direction: Direction,
    pub apple_start: Cell,
    /// Count the cell the tail is leaving this step as occupied.
    pub include_vacating_tail: bool,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 15,
            cell_px: SNAKE_CELL_PX,
            tick_ms: SNAKE_TICK_MS,
            start_body: vec![Cell::new(8, 7), Cell::new(8, 8)],
            start_direction: Direction::Up,
            apple_start: Cell::new(8, 3),
            include_vacating_tail: false,
        }
    }
}

impl SnakeConfig {
    pub fn grid(&self) -> GridSize {
        GridSize {
            width: self.grid_width,
            height: self.grid_height,
        }
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SnakeWorld {
    pub config: SnakeConfig,
    /// Body segments. Head is at the front (index 0).
    pub body: VecDeque<Cell>,
    pub direction: Direction,
    /// `None` only when the board is full.
    pub apple: Option<Cell>,
    /// Cell the head moves into this tick; set by `integrate`, consumed by `award`.
    pub pending_head: Option<Cell>,
}

impl SnakeWorld {
    pub fn new(config: SnakeConfig) -> Self {
        let mut world = Self {
            config,
            body: VecDeque::new(),
            direction: Direction::Up,
            apple: None,
            pending_head: None,
        };
        world.reset_state();
        world
    }

    pub fn grid(&self) -> GridSize {
        self.config.grid()
    }

    pub fn head(&self) -> Cell {
        self.body.front().copied().unwrap_or_default()
    }

    pub(super) fn reset_state(&mut self) {
        self.body = self.config.start_body.iter().copied().collect();
        if self.body.is_empty() {
            self.body
                .push_back(Cell::new(self.config.grid_width / 2, self.config.grid_height / 2));
        }
        self.direction = self.config.start_direction;
        self.pending_head = None;

        let grid = self.grid();
        let start = self.config.apple_start;
        self.apple = if grid.contains(start) && !self.body.contains(&start) {
            Some(start)
        } else {
            free_cells(grid, &self.body).into_iter().next()
        };
    }
}

/// Every cell of `grid` not covered by `body`, row by row.
pub fn free_cells(grid: GridSize, body: &VecDeque<Cell>) -> Vec<Cell> {
    (0..grid.height)
        .flat_map(|y| (0..grid.width).map(move |x| Cell::new(x, y)))
        .filter(|cell| !body.contains(cell))
        .collect()
}
