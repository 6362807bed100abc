//! Host state: which screen is showing and the mounted game, if any.

use crate::config::ArcadeConfig;
use crate::core::constants::INPUT_POLL_MS;
use crate::core::engine::TickOutcome;
use crate::games::{ActiveGame, GameKind, PuzzleScreen};
use rand::rngs::StdRng;
use std::time::Duration;

pub enum Screen {
    Menu,
    Game(ActiveGame),
    Puzzle(PuzzleScreen),
}

pub struct Arcade {
    pub config: ArcadeConfig,
    pub screen: Screen,
    /// Menu cursor, kept while a game is open.
    pub menu_selected: usize,
    pub rng: StdRng,
}

impl Arcade {
    pub fn new(config: ArcadeConfig, rng: StdRng) -> Self {
        Self {
            config,
            screen: Screen::Menu,
            menu_selected: 0,
            rng,
        }
    }

    /// Mount a game view in state `start`, replacing the current screen.
    pub fn open(&mut self, kind: GameKind) {
        self.menu_selected = GameKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or(self.menu_selected);
        self.screen = match ActiveGame::mount(kind, &self.config) {
            Some(game) => Screen::Game(game),
            None => Screen::Puzzle(PuzzleScreen::new(self.config.puzzle.clone(), &mut self.rng)),
        };
    }

    /// Unmount the current view and return to the menu.
    pub fn leave(&mut self) {
        if let Screen::Game(game) = &mut self.screen {
            game.stop();
            log::info!(
                "left {} (run {}, score {})",
                game.kind().slug(),
                game.session().run(),
                game.session().score
            );
        }
        self.screen = Screen::Menu;
    }

    pub fn current_kind(&self) -> Option<GameKind> {
        match &self.screen {
            Screen::Menu => None,
            Screen::Game(game) => Some(game.kind()),
            Screen::Puzzle(_) => Some(GameKind::Puzzle),
        }
    }

    pub fn menu_up(&mut self) {
        self.menu_selected = self.menu_selected.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        if self.menu_selected + 1 < GameKind::ALL.len() {
            self.menu_selected += 1;
        }
    }

    /// Feed elapsed wall-clock time to the mounted game.
    pub fn pump(&mut self, dt_ms: u64) -> Option<TickOutcome> {
        match &mut self.screen {
            Screen::Game(game) => game.pump(dt_ms, &mut self.rng),
            Screen::Menu | Screen::Puzzle(_) => None,
        }
    }

    /// How long the host may block on input before the next tick is due.
    pub fn poll_timeout(&self) -> Duration {
        let idle = Duration::from_millis(INPUT_POLL_MS);
        match &self.screen {
            Screen::Game(game) => game.time_until_due().map_or(idle, |due| due.min(idle)),
            Screen::Menu | Screen::Puzzle(_) => idle,
        }
    }
}
