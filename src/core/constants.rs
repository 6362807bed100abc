// Frame cadence
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS for render-driven games
pub const MAX_FRAME_DT_MS: u64 = 500; // clamp after pause/lag
pub const INPUT_POLL_MS: u64 = 50; // idle poll when no loop is running

// Snake defaults
pub const SNAKE_TICK_MS: u64 = 200;
pub const SNAKE_CELL_PX: f64 = 40.0;

// Shared canvas size for the action games (px)
pub const FIELD_WIDTH: f64 = 400.0;
pub const FIELD_HEIGHT: f64 = 600.0;
