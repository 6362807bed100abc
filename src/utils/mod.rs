//! Utility modules: data directory helpers and log setup.

pub mod logging;
pub mod persistence;
