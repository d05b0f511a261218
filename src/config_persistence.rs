//! Locating, seeding, and loading `config.toml`, plus database path resolution.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::{
    config::{sanitize_config, Config},
    errors::{AppError, AppResult},
};

const APP_DIR_NAME: &str = "playlist_tracker";
const DEFAULT_DB_FILE_NAME: &str = "tracker.db";

pub fn system_config_template_text() -> &'static str {
    include_str!("../config/config.system.toml")
}

/// `<config_dir>/playlist_tracker`.
pub fn default_config_root() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| AppError::Config("could not determine the user config directory".into()))
}

/// `<data_dir>/playlist_tracker`.
pub fn default_data_root() -> AppResult<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| AppError::Config("could not determine the user data directory".into()))
}

/// Writes the commented system template when no config file exists yet.
pub fn ensure_config_file(path: &Path) -> AppResult<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    info!(
        "Config file not found. Creating default config. path={}",
        path.display()
    );
    std::fs::write(path, system_config_template_text())?;
    Ok(())
}

/// Reads and sanitizes the config. Parse failures fall back to defaults and leave the file alone.
pub fn load_config_file(path: &Path) -> AppResult<Config> {
    let config_content = std::fs::read_to_string(path)?;
    let config = match toml::from_str::<Config>(&config_content) {
        Ok(config) => config,
        Err(err) => {
            warn!(
                "Failed to parse config file {}. Using defaults. error={}",
                path.display(),
                err
            );
            Config::default()
        }
    };
    Ok(sanitize_config(config))
}

/// Configured path when set, otherwise `tracker.db` under `data_root`.
pub fn resolve_database_path(config: &Config, data_root: &Path) -> PathBuf {
    if config.database.path.is_empty() {
        data_root.join(DEFAULT_DB_FILE_NAME)
    } else {
        PathBuf::from(&config.database.path)
    }
}
