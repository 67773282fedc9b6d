//! Meterdesk configuration system.
//!
//! Provides TOML-based settings for the admin console's assistant
//! integration. All sections use serde defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use meterdesk_config::load_settings;
//!
//! let settings = load_settings().expect("failed to load settings");
//! println!("{}", settings.assistant.base_url);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{AssistantSettings, Settings};
pub use toml_loader::{default_settings_path, load_from_path};

use meterdesk_common::ConfigError;

/// Environment variable overriding the assistant base URL.
pub const API_URL_ENV: &str = "METERDESK_API_URL";

/// Load settings from the platform default path, applying the
/// `METERDESK_API_URL` override if set.
///
/// Creates a default settings file on first run, then validates the
/// result.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let mut settings = toml_loader::load_default()?;

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.is_empty() {
            tracing::info!("overriding assistant base_url from {API_URL_ENV}");
            settings.assistant.base_url = url;
        }
    }

    validation::validate(&settings)?;
    Ok(settings)
}
