//! File logging. The terminal belongs to the UI, so records go to
//! `~/.minigames/minigames.log` instead of stderr.

use super::persistence;
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

pub const LOG_FILE: &str = "minigames.log";

/// Install the global logger. `RUST_LOG` overrides `default_level`.
pub fn init(default_level: LevelFilter) -> io::Result<PathBuf> {
    let path = persistence::data_path(LOG_FILE)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(path)
}
