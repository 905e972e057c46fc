//! # Conversation State
//!
//! The two debate columns and the bubbles inside them. A bubble is placed
//! hidden first and revealed later by the session driver; this module only
//! records those transitions, it never paces them.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.2.0: Thinking placeholders while a request is in flight
//! - 1.1.0: Two-phase bubbles (placed hidden, then revealed)
//! - 1.0.0: Plain per-column message lists

use crate::transcript::{BubbleState, Column, Exchange};

/// One placed message bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    /// Position of the Exchange in the normalized transcript, shared across
    /// both columns.
    pub index: usize,
    pub exchange: Exchange,
    pub state: BubbleState,
}

/// State of the current debate conversation.
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    /// Name over the left column.
    pub expert1: String,
    /// Name over the right column.
    pub expert2: String,
    left: Vec<Bubble>,
    right: Vec<Bubble>,
    /// True from submission until the transcript arrives.
    thinking: bool,
    /// Shared scroll offset for both columns, in rendered lines.
    scroll_offset: u16,
}

impl ConversationState {
    pub fn new() -> Self {
        ConversationState::default()
    }

    /// Start a fresh debate: both columns cleared, headers renamed, thinking
    /// placeholders up.
    pub fn begin(&mut self, expert1: &str, expert2: &str) {
        self.left.clear();
        self.right.clear();
        self.expert1 = expert1.to_string();
        self.expert2 = expert2.to_string();
        self.thinking = true;
        self.scroll_offset = 0;
    }

    /// The transcript arrived; placeholders come down.
    pub fn transcript_received(&mut self) {
        self.thinking = false;
    }

    /// The session ended without a transcript.
    pub fn abort(&mut self) {
        self.thinking = false;
    }

    /// Append exchange `index` to `column` as a hidden bubble.
    pub fn place(&mut self, index: usize, exchange: Exchange, column: Column) {
        let bubble = Bubble {
            index,
            exchange,
            state: BubbleState::Pending,
        };
        match column {
            Column::Left => self.left.push(bubble),
            Column::Right => self.right.push(bubble),
        }
    }

    /// Mark the bubble for exchange `index` visible, whichever column holds
    /// it.
    pub fn reveal(&mut self, index: usize) {
        for bubble in self.left.iter_mut().chain(self.right.iter_mut()) {
            if bubble.index == index {
                bubble.state = BubbleState::Visible;
                return;
            }
        }
    }

    pub fn left(&self) -> &[Bubble] {
        &self.left
    }

    pub fn right(&self) -> &[Bubble] {
        &self.right
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.left
            .iter()
            .chain(self.right.iter())
            .filter(|b| b.state == BubbleState::Visible)
            .count()
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(amount);
    }
}
