//! Default TOML settings template with inline documentation comments.

/// Generate the default TOML settings content with comments.
pub(crate) fn default_settings_toml() -> String {
    r##"# Meterdesk Settings
# Only override what you want to change -- missing fields use defaults.

[assistant]
# Base URL of the platform API. The /api/v1 prefix is appended by the
# client. Can also be overridden with the METERDESK_API_URL env var.
# base_url = "http://localhost:8000"

# Bearer token sent on every assistant request.
# api_token = "..."

# Per-request timeout in seconds.
# timeout_secs = 30
"##
    .to_string()
}
