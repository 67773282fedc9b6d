//! Session types and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::AssistantError;

/// Display mode requested when opening the chat widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Minimized,
    FullScreen,
}

/// Derived display state of the chat widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Closed,
    Minimized,
    FullScreen,
    /// Open as the default docked widget (neither minimized nor
    /// fullscreen).
    Normal,
}

/// What a `send_message` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was empty after trimming; nothing happened.
    Ignored,
    /// Assistant replied and the message was appended.
    Answered,
    /// Request failed; an error notice was appended.
    Failed,
    /// Conversation was reset while the request was in flight; the
    /// response was dropped.
    Discarded,
}

/// Canned billing prompts offered as one-click actions in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    CreatePlan,
    ModifyPlan,
    AnalyzeUsage,
    PricingAdvice,
    Troubleshoot,
}

impl QuickAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::CreatePlan => "I want to create a new billing plan. Can you help me set it up?",
            Self::ModifyPlan => "I need to modify an existing billing plan.",
            Self::AnalyzeUsage => {
                "Can you analyze my API usage patterns and suggest optimizations?"
            }
            Self::PricingAdvice => "I need advice on pricing strategy for my APIs.",
            Self::Troubleshoot => "I'm having issues with my billing configuration.",
        }
    }
}

/// Guard that clears the in-flight flag on drop, ensuring it is always
/// released even if the future is cancelled or an early return occurs.
pub(crate) struct ProcessingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ProcessingGuard<'a> {
    /// Attempt to mark the session in-flight. Returns `Err` if a request
    /// is already outstanding.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, AssistantError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(AssistantError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
