//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `minigames <version> (<date> <commit>)`, shown by `--version` and the menu.
pub fn version_line() -> String {
    format!(
        "minigames {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
