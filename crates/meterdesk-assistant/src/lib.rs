//! Billing-assistant client core for the meterdesk admin console.
//!
//! Provides the conversational billing-assistant integration:
//! - Chat session state (open/minimized/fullscreen, unread counts)
//! - Message history with structured billing results
//! - Request lifecycle with stale-response protection
//! - HTTP client for the platform's NLP service

pub mod client;
pub mod session;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use meterdesk_common::ConversationId;
use serde::{Deserialize, Serialize};

pub use client::{NlpServiceClient, NlpServiceConfig};
pub use session::{ChatSession, DisplayMode, OpenMode, QuickAction, SendOutcome};

/// Key-value context attached to a chat request (e.g. the API or
/// consumer the operator is currently looking at).
pub type MessageContext = serde_json::Map<String, serde_json::Value>;

/// Static notice appended to the log when an assistant request fails.
pub const ERROR_NOTICE: &str = "Sorry, I encountered an error. Please try again.";

/// Boundary to the external NLP billing-assistant service.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    async fn send_chat_message(
        &self,
        message: &str,
        conversation_id: Option<&ConversationId>,
        context: &MessageContext,
    ) -> Result<AssistantReply, AssistantError>;

    /// Best-effort discard of server-side conversation history.
    async fn clear_conversation_history(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<(), AssistantError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    Error,
}

/// One entry in the conversation log. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub parsed_billing: Option<serde_json::Value>,
    pub confidence: Option<f64>,
    pub follow_up_prompts: Option<Vec<String>>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::plain(MessageRole::User, content)
    }

    /// Assistant message built from a backend reply.
    pub fn assistant(reply: &AssistantReply) -> Self {
        Self {
            id: meterdesk_common::new_id(),
            role: MessageRole::Assistant,
            content: reply.response.clone(),
            timestamp: Utc::now(),
            parsed_billing: reply.parsed_billing.clone(),
            confidence: reply.confidence,
            follow_up_prompts: reply.follow_up_prompts.clone(),
        }
    }

    /// Error-role message with the static failure notice.
    pub fn error_notice() -> Self {
        Self::plain(MessageRole::Error, ERROR_NOTICE)
    }

    fn plain(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: meterdesk_common::new_id(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            parsed_billing: None,
            confidence: None,
            follow_up_prompts: None,
        }
    }
}

/// Structured result from the assistant service.
///
/// The optional fields only appear when the service recognized a billing
/// intent; absence is explicit rather than inferred from JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub response: String,
    pub conversation_id: String,
    #[serde(default)]
    pub parsed_billing: Option<serde_json::Value>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default, rename = "next_questions")]
    pub follow_up_prompts: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("assistant unavailable: {0}")]
    Unavailable(String),
    #[error("rate limited")]
    RateLimited,
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("request timed out")]
    Timeout,
    #[error("session is busy with another request")]
    Busy,
}
