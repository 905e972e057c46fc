//! # Reveal Sequencer
//!
//! Exchanges are presented one at a time rather than all at once. Each bubble
//! passes through exactly two states - placed hidden, then visible - and the
//! pauses between state changes are fixed. Earlier revisions drove this with
//! nested timer callbacks; the plan below makes the ordering explicit so the
//! session driver is a straight walk over it.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 1.1.0: Inter-message gap settled at 2000 ms (0.3.0 briefly shipped 400 ms)
//! - 1.0.0: Initial reveal animation, replacing the all-at-once render

use std::time::Duration;

/// Delay between placing a hidden bubble and revealing it, in milliseconds.
/// Long enough for the fade-in to register, short enough to read as one
/// motion.
pub const REVEAL_DELAY_MS: u64 = 150;

/// Gap before the next Exchange is processed, in milliseconds. 2000 is the
/// settled value; do not split the difference with the old 400.
pub const MESSAGE_GAP_MS: u64 = 2000;

/// Visual state of one placed bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleState {
    /// Appended to its column but not yet shown.
    Pending,
    /// Shown; terminal state.
    Visible,
}

/// Timing knobs for the reveal sequence. [`Default`] carries the production
/// constants; tests construct faster ones.
#[derive(Debug, Clone, Copy)]
pub struct RevealTiming {
    /// Pause between placing a bubble and revealing it.
    pub reveal_delay: Duration,
    /// Pause after a reveal before the next Exchange.
    pub message_gap: Duration,
}

impl RevealTiming {
    pub const fn new(reveal_delay: Duration, message_gap: Duration) -> Self {
        RevealTiming {
            reveal_delay,
            message_gap,
        }
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        RevealTiming {
            reveal_delay: Duration::from_millis(REVEAL_DELAY_MS),
            message_gap: Duration::from_millis(MESSAGE_GAP_MS),
        }
    }
}

/// One step of the reveal plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Append exchange `index` to its column as a hidden bubble.
    Place(usize),
    /// Pause for [`RevealTiming::reveal_delay`].
    WaitReveal,
    /// Mark exchange `index` visible.
    Reveal(usize),
    /// Pause for [`RevealTiming::message_gap`].
    WaitGap,
}

/// The ordered step sequence for `count` exchanges.
///
/// Per exchange: place hidden, short wait, reveal, long gap - except that no
/// gap follows the final reveal. The sequence is strictly serial: a bubble is
/// always revealed before the next one is placed, so no two exchanges ever
/// animate at once.
pub fn reveal_plan(count: usize) -> Vec<RevealStep> {
    let mut steps = Vec::with_capacity(count * 4);

    for index in 0..count {
        steps.push(RevealStep::Place(index));
        steps.push(RevealStep::WaitReveal);
        steps.push(RevealStep::Reveal(index));
        if index + 1 < count {
            steps.push(RevealStep::WaitGap);
        }
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_is_empty_for_empty_transcript() {
        assert!(reveal_plan(0).is_empty());
    }

    #[test]
    fn test_plan_has_no_trailing_gap() {
        let plan = reveal_plan(1);
        assert_eq!(
            plan,
            vec![
                RevealStep::Place(0),
                RevealStep::WaitReveal,
                RevealStep::Reveal(0),
            ]
        );
    }

    #[test]
    fn test_plan_orders_place_before_reveal_before_next_place() {
        let plan = reveal_plan(3);

        for index in 0..3 {
            let place = plan
                .iter()
                .position(|s| *s == RevealStep::Place(index))
                .unwrap();
            let reveal = plan
                .iter()
                .position(|s| *s == RevealStep::Reveal(index))
                .unwrap();
            assert!(place < reveal);

            if index + 1 < 3 {
                let next_place = plan
                    .iter()
                    .position(|s| *s == RevealStep::Place(index + 1))
                    .unwrap();
                assert!(reveal < next_place, "exchange {index} must finish first");
            }
        }
    }

    #[test]
    fn test_plan_never_overlaps_pending_bubbles() {
        // Walk the plan tracking bubble states; at most one bubble may be
        // Pending at any step
        let mut states: Vec<Option<BubbleState>> = vec![None; 4];

        for step in reveal_plan(4) {
            match step {
                RevealStep::Place(i) => states[i] = Some(BubbleState::Pending),
                RevealStep::Reveal(i) => states[i] = Some(BubbleState::Visible),
                RevealStep::WaitReveal | RevealStep::WaitGap => {}
            }

            let pending = states
                .iter()
                .filter(|s| matches!(s, Some(BubbleState::Pending)))
                .count();
            assert!(pending <= 1);
        }

        assert!(states
            .iter()
            .all(|s| matches!(s, Some(BubbleState::Visible))));
    }

    #[test]
    fn test_default_timing_carries_the_settled_constants() {
        let timing = RevealTiming::default();
        assert_eq!(timing.reveal_delay, Duration::from_millis(150));
        assert_eq!(timing.message_gap, Duration::from_millis(2000));
    }
}
