//! Settings validation.

use crate::schema::Settings;
use meterdesk_common::ConfigError;

/// Validate settings, collecting all errors into one `ConfigError`.
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    let url = settings.assistant.base_url.trim();
    if url.is_empty() {
        errors.push("assistant.base_url must not be empty".to_string());
    } else if !url.starts_with("http://") && !url.starts_with("https://") {
        errors.push(format!(
            "assistant.base_url must start with http:// or https:// (got '{url}')"
        ));
    }

    if settings.assistant.timeout_secs == 0 {
        errors.push("assistant.timeout_secs must be nonzero".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Settings;

    #[test]
    fn default_is_valid() {
        assert!(validate(&Settings::default()).is_ok());
    }

    #[test]
    fn empty_base_url_rejected() {
        let mut settings = Settings::default();
        settings.assistant.base_url = "".to_string();
        let err = validate(&settings).unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn non_http_base_url_rejected() {
        let mut settings = Settings::default();
        settings.assistant.base_url = "ftp://example.com".to_string();
        assert!(validate(&settings).is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let mut settings = Settings::default();
        settings.assistant.timeout_secs = 0;
        let err = validate(&settings).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn multiple_errors_joined() {
        let mut settings = Settings::default();
        settings.assistant.base_url = "".to_string();
        settings.assistant.timeout_secs = 0;
        let err = validate(&settings).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("base_url"));
        assert!(msg.contains("timeout_secs"));
    }
}
