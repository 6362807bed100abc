//! Terminal front end.

pub mod game_common;
pub mod game_scene;
pub mod menu_scene;
pub mod puzzle_scene;
pub mod raster;

use crate::arcade::{Arcade, Screen};
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, arcade: &Arcade) {
    let area = frame.size();
    match &arcade.screen {
        Screen::Menu => menu_scene::render_menu(frame, area, arcade.menu_selected),
        Screen::Game(game) => game_scene::render_game_scene(frame, area, game),
        Screen::Puzzle(screen) => puzzle_scene::render_puzzle_scene(frame, area, screen),
    }
}
