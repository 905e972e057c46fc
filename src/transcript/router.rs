//! # Speaker Router
//!
//! Decides which of the two display columns an [`Exchange`] lands in.

use log::debug;

use super::Exchange;

/// Target column for a routed Exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// expert1's side.
    Left,
    /// expert2's side.
    Right,
}

/// Routes Exchanges to columns by speaker name.
///
/// Matching is case-insensitive exact comparison against the configured
/// expert names. Upstream speaker labels are not guaranteed to match those
/// names verbatim, so an unmatched speaker falls back to alternating on the
/// count of already-routed messages (even count -> left). The fallback is a
/// documented degraded mode, not an error.
#[derive(Debug, Clone)]
pub struct SpeakerRouter {
    expert1: String,
    expert2: String,
    routed: usize,
}

impl SpeakerRouter {
    pub fn new(expert1: &str, expert2: &str) -> Self {
        SpeakerRouter {
            expert1: expert1.to_lowercase(),
            expert2: expert2.to_lowercase(),
            routed: 0,
        }
    }

    /// Count of messages routed so far, matched and fallback alike.
    pub fn routed(&self) -> usize {
        self.routed
    }

    /// Route one Exchange and advance the routed count.
    pub fn route(&mut self, exchange: &Exchange) -> Column {
        let speaker = exchange.speaker.to_lowercase();

        let column = if speaker == self.expert1 {
            Column::Left
        } else if speaker == self.expert2 {
            Column::Right
        } else {
            debug!(
                "speaker '{}' matches neither expert, using parity fallback",
                exchange.speaker
            );
            if self.routed % 2 == 0 {
                Column::Left
            } else {
                Column::Right
            }
        };

        self.routed += 1;
        column
    }
}
