//! # TUI State Management
//!
//! Form input and conversation column state.

mod conversation;
mod form;

pub use conversation::{Bubble, ConversationState};
pub use form::{DebateForm, FormField};
