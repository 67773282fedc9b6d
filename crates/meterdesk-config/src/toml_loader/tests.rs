//! Tests for TOML settings loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_meterdesk_settings.toml"));
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, meterdesk_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[assistant]
base_url = "https://gateway.internal:8443"
api_token = "secret"
"#,
    )
    .unwrap();

    let settings = load_from_path(&path).unwrap();
    assert_eq!(settings.assistant.base_url, "https://gateway.internal:8443");
    assert_eq!(settings.assistant.api_token.as_deref(), Some("secret"));
    // Defaults preserved
    assert_eq!(settings.assistant.timeout_secs, 30);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, meterdesk_common::ConfigError::ParseError(_)));
}

#[test]
fn load_with_invalid_values_still_returns_parsed_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[assistant]
timeout_secs = 0
"#,
    )
    .unwrap();

    // Validation failure is a warning, not an error, at load time.
    let settings = load_from_path(&path).unwrap();
    assert_eq!(settings.assistant.timeout_secs, 0);
}

#[test]
fn create_default_settings_writes_parseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    create_default_settings(&path).unwrap();
    assert!(path.exists());

    let settings = load_from_path(&path).unwrap();
    assert_eq!(settings.assistant.base_url, "http://localhost:8000");
}

#[test]
fn default_settings_path_ends_with_expected_name() {
    let path = default_settings_path().unwrap();
    assert!(path.ends_with(Path::new("meterdesk").join("settings.toml")));
}
