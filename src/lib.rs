//! Minigames - terminal arcade of small real-time games.
//!
//! This module exposes the game loop, collision rules and games for
//! testing and external use.

pub mod arcade;
pub mod build_info;
pub mod collision;
pub mod config;
pub mod core;
pub mod games;
pub mod input;
pub mod ui;
pub mod utils;
