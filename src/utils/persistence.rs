//! JSON helpers for files under `~/.minigames/`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DATA_DIR: &str = ".minigames";

/// Get the ~/.minigames/ directory path, creating it if needed.
pub fn minigames_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    data_dir_in(&home_dir)
}

/// `<home>/.minigames`, created if needed.
pub fn data_dir_in(home: &Path) -> io::Result<PathBuf> {
    let dir = home.join(DATA_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.minigames/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(minigames_dir()?.join(filename))
}

/// Write a value as pretty-printed JSON to ~/.minigames/. Refuses to
/// replace an existing file unless `overwrite` is set.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T, overwrite: bool) -> io::Result<PathBuf> {
    let path = data_path(filename)?;
    if path.exists() && !overwrite {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        ));
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&path, json)?;
    Ok(path)
}
