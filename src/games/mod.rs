//! The minigames: Snake, Flappy Bird, Speed Racer, Helix Jump, Puzzle Mania.

pub mod flappy;
pub mod helix;
pub mod puzzle;
pub mod racer;
pub mod snake;

pub use flappy::{FlappyConfig, FlappyWorld};
pub use helix::{HelixConfig, HelixWorld};
pub use puzzle::{PuzzleConfig, PuzzleScreen, SortPuzzle};
pub use racer::{RacerConfig, RacerWorld};
pub use snake::{SnakeConfig, SnakeWorld};

use crate::config::ArcadeConfig;
use crate::core::engine::{InputOutcome, TickOutcome};
use crate::core::input::Command;
use crate::core::render::RenderSurface;
use crate::core::runner::GameRunner;
use crate::core::session::GameSession;
use crate::core::world::World;
use rand::RngCore;
use std::time::Duration;

/// Menu entries, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Snake,
    Flappy,
    Racer,
    Puzzle,
    Helix,
}

impl GameKind {
    pub const ALL: [GameKind; 5] = [
        GameKind::Snake,
        GameKind::Flappy,
        GameKind::Racer,
        GameKind::Puzzle,
        GameKind::Helix,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(GameKind::Snake)
    }

    /// Parse the command-line name (`snake`, `flappy`, `racer`, `helix`, `puzzle`).
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(slug))
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Snake => "snake",
            Self::Flappy => "flappy",
            Self::Racer => "racer",
            Self::Puzzle => "puzzle",
            Self::Helix => "helix",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Snake => "Snake",
            Self::Flappy => "Flappy Bird",
            Self::Racer => "Speed Racer",
            Self::Puzzle => "Puzzle Mania",
            Self::Helix => "Helix Jump",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Snake => "Classic snake game. Eat apples and grow longer!",
            Self::Flappy => "Navigate through pipes in this addictive flying game!",
            Self::Racer => "Race against time in this thrilling car racing game!",
            Self::Puzzle => "Challenge your mind with brain-teasing puzzles!",
            Self::Helix => "Test your reflexes in this addictive vertical platformer!",
        }
    }

    /// Controls line shown in the game view.
    pub fn controls(&self) -> &'static str {
        match self {
            Self::Snake => "[Arrows] Steer  [Enter] Start  [Esc] Menu",
            Self::Flappy => "[Space] Flap / Start  [Enter] Start  [Esc] Menu",
            Self::Racer => "[Left/Right] Steer  [Enter] Start  [Esc] Menu",
            Self::Puzzle => "[1-9] Type  [Bksp] Delete  [Enter] Check  [N] New  [Esc] Menu",
            Self::Helix => "[Space] Jump  [Enter] Start  [Esc] Menu",
        }
    }
}

/// A mounted real-time game. Dropping it cancels its loop and destroys the session.
#[derive(Debug)]
pub enum ActiveGame {
    Snake(GameRunner<SnakeWorld>),
    Flappy(GameRunner<FlappyWorld>),
    Racer(GameRunner<RacerWorld>),
    Helix(GameRunner<HelixWorld>),
}

/// Forward a call to whichever runner is mounted.
macro_rules! each_runner {
    ($game:expr, $runner:ident => $body:expr) => {
        match $game {
            ActiveGame::Snake($runner) => $body,
            ActiveGame::Flappy($runner) => $body,
            ActiveGame::Racer($runner) => $body,
            ActiveGame::Helix($runner) => $body,
        }
    };
}

impl ActiveGame {
    /// Mount `kind` in state `start`. `None` for the puzzle, which has no loop.
    pub fn mount(kind: GameKind, config: &ArcadeConfig) -> Option<Self> {
        let game = match kind {
            GameKind::Snake => Self::Snake(GameRunner::new(SnakeWorld::new(config.snake.clone()))),
            GameKind::Flappy => {
                Self::Flappy(GameRunner::new(FlappyWorld::new(config.flappy.clone())))
            }
            GameKind::Racer => Self::Racer(GameRunner::new(RacerWorld::new(config.racer.clone()))),
            GameKind::Helix => Self::Helix(GameRunner::new(HelixWorld::new(config.helix.clone()))),
            GameKind::Puzzle => return None,
        };
        log::info!("mounted {}", kind.slug());
        Some(game)
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Self::Snake(_) => GameKind::Snake,
            Self::Flappy(_) => GameKind::Flappy,
            Self::Racer(_) => GameKind::Racer,
            Self::Helix(_) => GameKind::Helix,
        }
    }

    /// Host start button.
    pub fn start(&mut self) {
        each_runner!(self, runner => runner.start())
    }

    pub fn stop(&mut self) {
        each_runner!(self, runner => runner.stop())
    }

    pub fn handle_input(&mut self, command: Command) -> InputOutcome {
        each_runner!(self, runner => runner.handle_input(command))
    }

    pub fn pump<R: RngCore>(&mut self, dt_ms: u64, rng: &mut R) -> Option<TickOutcome> {
        each_runner!(self, runner => runner.pump(dt_ms, rng))
    }

    pub fn time_until_due(&self) -> Option<Duration> {
        each_runner!(self, runner => runner.time_until_due())
    }

    pub fn session(&self) -> &GameSession {
        each_runner!(self, runner => runner.engine().session())
    }

    pub fn field_size(&self) -> (f64, f64) {
        each_runner!(self, runner => runner.engine().world().field_size())
    }

    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        each_runner!(self, runner => runner.draw(surface))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::DisplayList;
    use crate::core::session::SessionState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_slugs_round_trip() {
        for kind in GameKind::ALL {
            assert_eq!(GameKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(GameKind::from_slug("HELIX"), Some(GameKind::Helix));
        assert_eq!(GameKind::from_slug("tetris"), None);
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(GameKind::from_index(3), GameKind::Puzzle);
        assert_eq!(GameKind::from_index(99), GameKind::Snake);
    }

    #[test]
    fn test_puzzle_has_no_runner() {
        assert!(ActiveGame::mount(GameKind::Puzzle, &ArcadeConfig::default()).is_none());
    }

    #[test]
    fn test_mounted_game_waits_for_start() {
        let config = ArcadeConfig::default();
        for kind in GameKind::ALL.into_iter().filter(|k| *k != GameKind::Puzzle) {
            let game = ActiveGame::mount(kind, &config).unwrap();
            assert_eq!(game.kind(), kind);
            assert_eq!(game.session().state, SessionState::Start);
            assert_eq!(game.time_until_due(), None);
        }
    }

    #[test]
    fn test_start_and_pump() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = ActiveGame::mount(GameKind::Racer, &ArcadeConfig::default()).unwrap();
        game.start();
        assert_eq!(game.pump(16, &mut rng), Some(TickOutcome::Continue));
        assert_eq!(game.session().ticks, 1);

        let (w, h) = game.field_size();
        let mut list = DisplayList::new(w, h);
        game.draw(&mut list);
        assert!(!list.is_empty());

        game.stop();
        assert_eq!(game.pump(16, &mut rng), None);
    }
}
