//! HTTP client for the platform's NLP billing-assistant service.
//!
//! Implements the `AssistantBackend` trait against the admin API
//! (`{base_url}/api/v1/nlp/...`), with Bearer auth and a per-request
//! timeout.

use std::time::Duration;

use async_trait::async_trait;
use meterdesk_common::ConversationId;
use meterdesk_config::AssistantSettings;
use serde::Serialize;
use tracing::debug;

use crate::{AssistantBackend, AssistantError, AssistantReply, MessageContext};

const API_PREFIX: &str = "/api/v1";

/// NLP service client configuration.
#[derive(Debug, Clone)]
pub struct NlpServiceConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl NlpServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Build a config from the `[assistant]` section of the settings file.
    pub fn from_settings(settings: &AssistantSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            api_token: settings.api_token.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// NLP service client.
pub struct NlpServiceClient {
    config: NlpServiceConfig,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    conversation_id: Option<&'a str>,
    context: &'a MessageContext,
}

impl NlpServiceClient {
    pub fn new(config: NlpServiceConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{API_PREFIX}{path}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

fn transport_error(e: reqwest::Error) -> AssistantError {
    if e.is_timeout() {
        AssistantError::Timeout
    } else {
        AssistantError::Network(e.to_string())
    }
}

#[async_trait]
impl AssistantBackend for NlpServiceClient {
    async fn send_chat_message(
        &self,
        message: &str,
        conversation_id: Option<&ConversationId>,
        context: &MessageContext,
    ) -> Result<AssistantReply, AssistantError> {
        let body = ChatRequest {
            message,
            conversation_id: conversation_id.map(ConversationId::as_str),
            context,
        };

        debug!(conversation = ?body.conversation_id, "NLP chat request");

        let response = self
            .authorize(self.http.post(self.endpoint("/nlp/chat-with-assistant")))
            .timeout(self.config.timeout)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AssistantError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AssistantError::Unavailable(format!("HTTP {status}: {text}")));
        }

        response
            .json::<AssistantReply>()
            .await
            .map_err(|e| AssistantError::Parse(e.to_string()))
    }

    async fn clear_conversation_history(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<(), AssistantError> {
        let url = self.endpoint(&format!("/nlp/conversations/{conversation_id}"));

        debug!(conversation = %conversation_id, "NLP clear-history request");

        let response = self
            .authorize(self.http.delete(&url))
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AssistantError::Unavailable(format!("HTTP {status}: {text}")));
        }
        Ok(())
    }
}
