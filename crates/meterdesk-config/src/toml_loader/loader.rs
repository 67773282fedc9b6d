//! Core TOML settings loading: read from path or platform default.

use crate::schema::Settings;
use crate::validation;
use meterdesk_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_settings, default_settings_path};

/// Load settings from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the settings are validated; if validation fails, a
/// warning is logged and the parsed settings are returned as-is.
pub fn load_from_path(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let settings: Settings = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&settings) {
        warn!("settings validation warning: {e} — using parsed settings with potentially invalid values");
    }

    info!("loaded settings from {}", path.display());
    Ok(settings)
}

/// Load settings from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/meterdesk/settings.toml`
/// On Linux: `~/.config/meterdesk/settings.toml`
///
/// If the file does not exist, creates a default settings file and
/// returns defaults.
pub fn load_default() -> Result<Settings, ConfigError> {
    let path = default_settings_path()?;

    match load_from_path(&path) {
        Ok(settings) => Ok(settings),
        Err(ConfigError::ParseError(msg)) if msg.contains("failed to read") => {
            info!("no settings found at {}, creating default", path.display());
            create_default_settings(&path)?;
            Ok(Settings::default())
        }
        Err(e) => Err(e),
    }
}
