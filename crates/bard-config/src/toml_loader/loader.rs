//! Core TOML config loading: read from path or platform default.

use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::error::ConfigError;
use crate::schema::BardSettings;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. No validation happens here.
pub fn load_from_path(path: &Path) -> Result<BardSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let settings: BardSettings = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(settings)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/bard/config.toml`
/// On macOS: `~/Library/Application Support/bard/config.toml`
///
/// If the file does not exist, writes the commented template there and
/// returns defaults.
pub fn load_default() -> Result<BardSettings, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(BardSettings::default())
        }
        other => other,
    }
}
