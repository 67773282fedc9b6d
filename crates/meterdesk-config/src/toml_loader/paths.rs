//! Settings path resolution and default file creation.

use meterdesk_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::template::default_settings_toml;

/// Get the platform-specific default settings file path.
pub fn default_settings_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("meterdesk").join("settings.toml"))
}

/// Create a default TOML settings file with documentation comments.
pub fn create_default_settings(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create settings directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = default_settings_toml();

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default settings to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default settings at {}", path.display());
    Ok(())
}
