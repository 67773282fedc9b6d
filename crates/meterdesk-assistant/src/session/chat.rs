//! Async request lifecycle for ChatSession (send, clear, quick actions).

use meterdesk_common::ConversationId;
use tracing::{debug, warn};

use crate::{AssistantBackend, AssistantError, ChatMessage, MessageContext};

use super::manager::ChatSession;
use super::types::{OpenMode, ProcessingGuard, QuickAction, SendOutcome};

impl ChatSession {
    /// Send a message to the assistant and append the exchange to the log.
    ///
    /// Empty (after trimming) input is a no-op. A backend failure is
    /// recovered locally: an error-role notice is appended and
    /// `Ok(SendOutcome::Failed)` is returned. The only `Err` is
    /// `AssistantError::Busy`, when a request is already outstanding.
    pub async fn send_message(
        &self,
        backend: &dyn AssistantBackend,
        text: &str,
        context: MessageContext,
    ) -> Result<SendOutcome, AssistantError> {
        if text.trim().is_empty() {
            return Ok(SendOutcome::Ignored);
        }

        // The in-flight flag and the user append land in one critical
        // section: the UI never sees the flag without the message.
        let (guard, generation, conversation_id) = {
            let mut state = self.lock_state();
            let guard = ProcessingGuard::acquire(&self.processing)?;
            state.messages.push(ChatMessage::user(text));
            (guard, state.generation, state.conversation_id.clone())
        };

        debug!(generation, "sending chat message to assistant");

        let result = backend
            .send_chat_message(text, conversation_id.as_ref(), &context)
            .await;

        let mut state = self.lock_state();
        if state.generation != generation {
            debug!(generation, "discarding response from a reset conversation");
            drop(guard);
            return Ok(SendOutcome::Discarded);
        }

        let outcome = match result {
            Ok(reply) => {
                if state.conversation_id.is_none() {
                    state.conversation_id =
                        Some(ConversationId::new(reply.conversation_id.clone()));
                }
                if state.is_minimized {
                    state.unread_count += 1;
                }
                state.messages.push(ChatMessage::assistant(&reply));
                SendOutcome::Answered
            }
            Err(e) => {
                warn!(error = %e, "assistant request failed");
                state.messages.push(ChatMessage::error_notice());
                SendOutcome::Failed
            }
        };

        // Release the flag while still holding the state lock, so the
        // terminal message is never observable with processing still set.
        drop(guard);
        Ok(outcome)
    }

    /// Reset the conversation: best-effort server-side discard, then an
    /// atomic local reset of log, conversation id, and unread count.
    ///
    /// The generation bump invalidates any request still in flight.
    pub async fn clear_conversation(&self, backend: &dyn AssistantBackend) {
        let conversation_id = self.lock_state().conversation_id.clone();

        if let Some(id) = conversation_id {
            if let Err(e) = backend.clear_conversation_history(&id).await {
                warn!(error = %e, conversation = %id, "failed to clear server-side history");
            }
        }

        let mut state = self.lock_state();
        state.messages.clear();
        state.conversation_id = None;
        state.unread_count = 0;
        state.generation += 1;
        debug!(generation = state.generation, "conversation cleared");
    }

    /// Fire a canned billing prompt and surface the widget minimized,
    /// so the reply lands as an unread notification.
    pub async fn quick_action(
        &self,
        backend: &dyn AssistantBackend,
        action: QuickAction,
        context: MessageContext,
    ) -> Result<SendOutcome, AssistantError> {
        self.open(OpenMode::Minimized);
        self.send_message(backend, action.prompt(), context).await
    }
}
