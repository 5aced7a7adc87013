//! Path utilities for sortviz data directories

use std::path::PathBuf;

/// Get the base sortviz data directory (~/.sortviz)
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".sortviz"))
        .unwrap_or_else(|| PathBuf::from(".sortviz"))
}

/// Get the config file path (~/.sortviz/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
