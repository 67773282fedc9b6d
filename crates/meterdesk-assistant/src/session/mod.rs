//! Chat session state management.
//!
//! A `ChatSession` owns the conversation log, the widget display state
//! (open/minimized/fullscreen), unread-count bookkeeping, and the
//! request lifecycle against an `AssistantBackend`.

mod chat;
mod manager;
mod types;


pub use manager::ChatSession;
pub use types::{DisplayMode, OpenMode, QuickAction, SendOutcome};
