//! Arcade configuration: per-game tunables loaded from JSON.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. The file lives at `~/.minigames/config.json` unless a path is
//! given on the command line.

use crate::core::spawn::SpawnPolicy;
use crate::games::{FlappyConfig, HelixConfig, PuzzleConfig, RacerConfig, SnakeConfig};
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: String, reason: String },

    #[error("could not determine home directory")]
    NoHomeDir,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub snake: SnakeConfig,
    pub flappy: FlappyConfig,
    pub racer: RacerConfig,
    pub helix: HelixConfig,
    pub puzzle: PuzzleConfig,
}

/// Where the effective config came from, for the startup log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

impl ArcadeConfig {
    /// Load `~/.minigames/config.json`, falling back to defaults when it does not exist.
    pub fn load_default() -> Result<(Self, ConfigSource), ConfigError> {
        Self::load_from_home(dirs::home_dir())
    }

    fn load_from_home(home: Option<PathBuf>) -> Result<(Self, ConfigSource), ConfigError> {
        let home = home.ok_or(ConfigError::NoHomeDir)?;
        let dir = persistence::data_dir_in(&home).map_err(|source| ConfigError::Io {
            path: home.join(persistence::DATA_DIR),
            source,
        })?;
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults));
        }
        let config = Self::load(&path)?;
        Ok((config, ConfigSource::File(path)))
    }

    /// Load and validate an explicit config file. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reject values the games cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.snake;
        positive_int("snake.grid_width", i64::from(s.grid_width))?;
        positive_int("snake.grid_height", i64::from(s.grid_height))?;
        positive("snake.cell_px", s.cell_px)?;
        nonzero_ms("snake.tick_ms", s.tick_ms)?;
        for (i, cell) in s.start_body.iter().enumerate() {
            if !s.grid().contains(*cell) {
                return Err(invalid(
                    &format!("snake.start_body[{i}]"),
                    format!("({}, {}) is outside the grid", cell.x, cell.y),
                ));
            }
        }

        let f = &self.flappy;
        positive("flappy.field_width", f.field_width)?;
        positive("flappy.field_height", f.field_height)?;
        positive("flappy.bird_width", f.bird_width)?;
        positive("flappy.bird_height", f.bird_height)?;
        positive("flappy.pipe_width", f.pipe_width)?;
        positive("flappy.pipe_gap", f.pipe_gap)?;
        finite("flappy.gravity", f.gravity)?;
        finite("flappy.jump_velocity", f.jump_velocity)?;
        finite("flappy.pipe_speed", f.pipe_speed)?;
        finite("flappy.pipe_margin", f.pipe_margin)?;
        spawn_policy("flappy.spawn", f.spawn)?;

        let r = &self.racer;
        positive("racer.field_width", r.field_width)?;
        positive("racer.field_height", r.field_height)?;
        positive("racer.car_width", r.car_width)?;
        positive("racer.car_height", r.car_height)?;
        positive("racer.obstacle_width", r.obstacle_width)?;
        positive("racer.obstacle_height", r.obstacle_height)?;
        finite("racer.car_margin", r.car_margin)?;
        finite("racer.steer_step", r.steer_step)?;
        finite("racer.obstacle_speed", r.obstacle_speed)?;
        spawn_policy("racer.spawn", r.spawn)?;

        let h = &self.helix;
        positive("helix.field_width", h.field_width)?;
        positive("helix.field_height", h.field_height)?;
        positive("helix.ball_radius", h.ball_radius)?;
        positive("helix.level_height", h.level_height)?;
        positive("helix.ring_radius", h.ring_radius)?;
        positive_int("helix.levels", i64::from(h.levels))?;
        finite("helix.gravity", h.gravity)?;
        finite("helix.jump_velocity", h.jump_velocity)?;
        finite("helix.rotation_speed", h.rotation_speed)?;
        finite("helix.level_twist", h.level_twist)?;
        finite("helix.band", h.band)?;
        if !(0.0..=std::f64::consts::TAU).contains(&h.hole_size) {
            return Err(invalid("helix.hole_size", "must be within [0, 2π]"));
        }

        let p = &self.puzzle;
        positive_int("puzzle.count", p.count as i64)?;
        positive_int("puzzle.max", i64::from(p.max))?;
        // Answers are typed one key per number.
        if p.max > 9 {
            return Err(invalid("puzzle.max", format!("must be at most 9, got {}", p.max)));
        }
        if p.count > p.max as usize {
            return Err(invalid(
                "puzzle.count",
                format!("{} distinct numbers cannot be drawn from 1..={}", p.count, p.max),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be a finite number"))
    }
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}

fn positive_int(field: &str, value: i64) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}

fn nonzero_ms(field: &str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        Err(invalid(field, "tick interval must be at least 1 ms"))
    } else {
        Ok(())
    }
}

fn spawn_policy(field: &str, policy: SpawnPolicy) -> Result<(), ConfigError> {
    match policy {
        SpawnPolicy::Spacing { distance } => positive(field, distance),
        SpawnPolicy::Chance { per_tick } => {
            if (0.0..=1.0).contains(&per_tick) {
                Ok(())
            } else {
                Err(invalid(field, format!("probability {per_tick} outside [0, 1]")))
            }
        }
    }
}
