//! Settings schema types.
//!
//! All structs use `serde(default)` so partial settings files work
//! correctly. Missing fields are filled with defaults matching the
//! development deployment of the platform.

use serde::{Deserialize, Serialize};

/// Root settings for the meterdesk admin client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub assistant: AssistantSettings,
}

/// Connection settings for the NLP billing-assistant service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSettings {
    /// Base URL of the platform API (the `/api/v1` prefix is appended
    /// by the client).
    pub base_url: String,
    /// Bearer token sent on every request when present.
    pub api_token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_token: None,
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[assistant]
base_url = "https://api.example.com"
"#,
        )
        .unwrap();
        assert_eq!(settings.assistant.base_url, "https://api.example.com");
        assert_eq!(settings.assistant.timeout_secs, 30);
        assert!(settings.assistant.api_token.is_none());
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.assistant.base_url, "http://localhost:8000");
    }

    #[test]
    fn settings_round_trip() {
        let mut settings = Settings::default();
        settings.assistant.api_token = Some("admin_token".to_string());
        let text = toml::to_string(&settings).unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back.assistant.api_token.as_deref(), Some("admin_token"));
    }
}
