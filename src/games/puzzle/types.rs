//! Puzzle Mania data structures.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// How many numbers are drawn.
    pub count: usize,
    /// Numbers are drawn from `1..=max`.
    pub max: u32,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self { count: 3, max: 9 }
    }
}

/// One puzzle: the shown numbers and their sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortPuzzle {
    pub numbers: Vec<u32>,
    pub solution: Vec<u32>,
}

/// Feedback after a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleMessage {
    Solved,
    Wrong,
}

impl PuzzleMessage {
    pub fn text(self) -> &'static str {
        match self {
            Self::Solved => "Congratulations! You solved the puzzle!",
            Self::Wrong => "Sorry, that's not correct. Try again!",
        }
    }
}

/// UI-agnostic input actions for the puzzle screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleInput {
    Digit(u32),
    Backspace,
    /// Check the entered answer.
    Submit,
    NewPuzzle,
    Other,
}

/// Puzzle screen state: current puzzle plus the answer being typed.
#[derive(Debug, Clone)]
pub struct PuzzleScreen {
    pub config: PuzzleConfig,
    pub puzzle: SortPuzzle,
    pub entry: Vec<u32>,
    pub message: Option<PuzzleMessage>,
    pub solved: u32,
    pub attempts: u32,
}
