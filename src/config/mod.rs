//! Configuration module for ci-smoke
//!
//! Handles loading settings from TOML files.

pub mod settings;

pub use settings::{PingSettings, ServiceTarget, Settings, TcpSettings, DEFAULT_CONFIG_FILE};

use crate::utils::ConfigError;
use std::path::Path;

/// Load settings from an explicit path, or the default location
pub fn load_settings<P: AsRef<Path>>(path: Option<P>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) => Settings::load_from_file(path),
        None => Settings::load_default(),
    }
}
