//! ChatSession struct and display-state management.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use meterdesk_common::ConversationId;

use crate::ChatMessage;

use super::types::{DisplayMode, OpenMode};

/// A billing-assistant chat session: message log, widget display state,
/// and in-flight request tracking.
///
/// One instance lives for the whole client; UI handles share it through
/// `&self` methods. The state lock is never held across an await, so a
/// host may close the widget or clear the conversation while a request
/// is outstanding.
pub struct ChatSession {
    pub(super) state: Mutex<SessionState>,
    /// Whether a `send_message` request is currently outstanding.
    pub(super) processing: AtomicBool,
}

#[derive(Debug, Default)]
pub(super) struct SessionState {
    pub(super) is_open: bool,
    pub(super) is_minimized: bool,
    pub(super) is_full_screen: bool,
    pub(super) conversation_id: Option<ConversationId>,
    pub(super) unread_count: u32,
    /// Bumped on every conversation reset; in-flight requests issued
    /// under an older generation are discarded on completion.
    pub(super) generation: u64,
    pub(super) messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SessionState::default()),
            processing: AtomicBool::new(false),
        }
    }

    pub(super) fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Open the widget in the given mode. Idempotent on the flags.
    pub fn open(&self, mode: OpenMode) {
        let mut state = self.lock_state();
        state.is_open = true;
        state.is_minimized = mode == OpenMode::Minimized;
        state.is_full_screen = mode == OpenMode::FullScreen;
    }

    /// Close the widget. Keeps messages and the unread count.
    pub fn close(&self) {
        let mut state = self.lock_state();
        state.is_open = false;
        state.is_minimized = false;
        state.is_full_screen = false;
    }

    /// Flip minimized; entering minimized leaves fullscreen.
    /// No-op while closed, so a closed widget never carries display flags.
    pub fn toggle_minimize(&self) {
        let mut state = self.lock_state();
        if !state.is_open {
            return;
        }
        state.is_minimized = !state.is_minimized;
        state.is_full_screen = false;
    }

    /// Flip fullscreen; entering fullscreen leaves minimized.
    /// No-op while closed.
    pub fn toggle_full_screen(&self) {
        let mut state = self.lock_state();
        if !state.is_open {
            return;
        }
        state.is_full_screen = !state.is_full_screen;
        state.is_minimized = false;
    }

    pub fn display_mode(&self) -> DisplayMode {
        let state = self.lock_state();
        if !state.is_open {
            DisplayMode::Closed
        } else if state.is_minimized {
            DisplayMode::Minimized
        } else if state.is_full_screen {
            DisplayMode::FullScreen
        } else {
            DisplayMode::Normal
        }
    }

    pub fn is_open(&self) -> bool {
        self.lock_state().is_open
    }

    pub fn is_minimized(&self) -> bool {
        self.lock_state().is_minimized
    }

    pub fn is_full_screen(&self) -> bool {
        self.lock_state().is_full_screen
    }

    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::Acquire)
    }

    pub fn unread_count(&self) -> u32 {
        self.lock_state().unread_count
    }

    pub fn conversation_id(&self) -> Option<ConversationId> {
        self.lock_state().conversation_id.clone()
    }

    /// Snapshot of the conversation log.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock_state().messages.clone()
    }

    pub fn message_count(&self) -> usize {
        self.lock_state().messages.len()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
