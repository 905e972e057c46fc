//! # Debate Session Driver
//!
//! Runs one debate end to end: request, normalize, then the paced reveal
//! walk. Progress is reported as [`SessionEvent`]s over an unbounded channel
//! so the interface layer stays a passive consumer; the driver owns every
//! pause and never reorders steps.
//!
//! Earlier revisions paced the reveal with nested one-shot timers, which made
//! the ordering implicit and the error paths easy to miss. The driver now
//! walks [`reveal_plan`] directly and funnels every failure into a single
//! [`SessionEvent::Failed`].
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 2.0.0: Plan-driven async walk; failures become events instead of panics
//! - 1.0.0: Sequential reveal driver

use std::future::Future;

use log::{debug, error, info};
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::api::DebateApi;
use crate::core::error::DebateResult;
use crate::transcript::sequencer::{reveal_plan, RevealStep};
use crate::transcript::{
    self, Column, DebateRequest, DebateResponse, Exchange, FigureSpec, RevealTiming, SpeakerRouter,
};

/// Progress of one debate session, in emission order.
///
/// `Placed` and `Revealed` always alternate per index; `Completed` is sent
/// only after the final `Revealed`. A failed session emits `Failed` and
/// nothing after it.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The request is on the wire.
    Requested,
    /// The response arrived and normalized to `total` exchanges.
    Received { total: usize },
    /// Exchange `index` was appended to `column`, still hidden.
    Placed {
        index: usize,
        exchange: Exchange,
        column: Column,
    },
    /// Exchange `index` became visible.
    Revealed { index: usize },
    /// All reveals done; the figure (if any) is ready to render.
    Completed { figure: Option<FigureSpec> },
    /// The session ended early; `message` is user-presentable.
    Failed { message: String },
}

/// Run one debate against the backend, reporting progress on `tx`.
///
/// All outcomes are events; the caller spawns this and listens.
pub async fn run_debate(
    api: DebateApi,
    request: DebateRequest,
    timing: RevealTiming,
    tx: mpsc::UnboundedSender<SessionEvent>,
) {
    run_debate_with(request, timing, tx, move |req| async move {
        api.generate(&req).await
    })
    .await
}

/// Driver core, generic over the generation call so pacing and ordering can
/// be exercised without a live backend.
pub async fn run_debate_with<F, Fut>(
    request: DebateRequest,
    timing: RevealTiming,
    tx: mpsc::UnboundedSender<SessionEvent>,
    generate: F,
) where
    F: FnOnce(DebateRequest) -> Fut,
    Fut: Future<Output = DebateResult<DebateResponse>>,
{
    info!(
        "Starting debate: '{}' vs '{}' on '{}'",
        request.expert1, request.expert2, request.topic
    );

    if tx.send(SessionEvent::Requested).is_err() {
        return;
    }

    let expert1 = request.expert1.clone();
    let expert2 = request.expert2.clone();

    let DebateResponse { transcript, figure } = match generate(request).await {
        Ok(response) => response,
        Err(e) => {
            error!("Debate request failed: {}", e);
            let _ = tx.send(SessionEvent::Failed {
                message: e.to_string(),
            });
            return;
        }
    };

    let exchanges = transcript::normalize(&transcript, &expert1, &expert2);
    let total = exchanges.len();
    info!("Received debate transcript with {} exchanges", total);

    if tx.send(SessionEvent::Received { total }).is_err() {
        return;
    }

    let mut router = SpeakerRouter::new(&expert1, &expert2);

    for step in reveal_plan(total) {
        match step {
            RevealStep::Place(index) => {
                let exchange = exchanges[index].clone();
                let column = router.route(&exchange);
                debug!(
                    "Placing exchange {}/{} ({:?}): {}",
                    index + 1,
                    total,
                    column,
                    exchange.speaker
                );
                if tx
                    .send(SessionEvent::Placed {
                        index,
                        exchange,
                        column,
                    })
                    .is_err()
                {
                    return;
                }
            }
            RevealStep::WaitReveal => sleep(timing.reveal_delay).await,
            RevealStep::Reveal(index) => {
                if tx.send(SessionEvent::Revealed { index }).is_err() {
                    return;
                }
            }
            RevealStep::WaitGap => sleep(timing.message_gap).await,
        }
    }

    info!("Debate completed: {} exchanges revealed", total);
    let _ = tx.send(SessionEvent::Completed { figure });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::DebateError;
    use crate::transcript::Transcript;
    use tokio::time::Instant;

    fn request() -> DebateRequest {
        DebateRequest::new("testing", "Ada", "Grace")
    }

    fn structured(pairs: &[(&str, &str, u32)]) -> DebateResponse {
        DebateResponse {
            transcript: Transcript::Structured(
                pairs
                    .iter()
                    .map(|(speaker, statement, turn)| Exchange {
                        speaker: speaker.to_string(),
                        statement: statement.to_string(),
                        turn: *turn,
                    })
                    .collect(),
            ),
            figure: None,
        }
    }

    async fn collect(mut rx: mpsc::UnboundedReceiver<SessionEvent>) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_event_order_and_columns() {
        let (tx, rx) = mpsc::unbounded_channel();
        let response = structured(&[
            ("Ada", "Opening.", 1),
            ("Grace", "Rebuttal.", 1),
            ("Moderator", "Aside.", 2),
        ]);

        tokio::spawn(run_debate_with(
            request(),
            RevealTiming::default(),
            tx,
            move |_| async move { Ok(response) },
        ));

        let events = collect(rx).await;

        assert_eq!(events[0], SessionEvent::Requested);
        assert_eq!(events[1], SessionEvent::Received { total: 3 });

        // Placed/Revealed strictly alternate per index
        for (i, chunk) in events[2..events.len() - 1].chunks(2).enumerate() {
            assert!(matches!(chunk[0], SessionEvent::Placed { index, .. } if index == i));
            assert_eq!(chunk[1], SessionEvent::Revealed { index: i });
        }

        // Named speakers route by name, the unmatched third by parity
        let columns: Vec<Column> = events
            .iter()
            .filter_map(|e| match e {
                SessionEvent::Placed { column, .. } => Some(*column),
                _ => None,
            })
            .collect();
        assert_eq!(columns, vec![Column::Left, Column::Right, Column::Left]);

        assert_eq!(
            events.last(),
            Some(&SessionEvent::Completed { figure: None })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_timing_has_no_trailing_gap() {
        let (tx, rx) = mpsc::unbounded_channel();
        let response = structured(&[("Ada", "One.", 1), ("Grace", "Two.", 1)]);
        let start = Instant::now();

        tokio::spawn(run_debate_with(
            request(),
            RevealTiming::default(),
            tx,
            move |_| async move { Ok(response) },
        ));

        let events = collect(rx).await;
        assert!(matches!(events.last(), Some(SessionEvent::Completed { .. })));

        // Two reveals: delay + gap + delay. No gap after the last reveal.
        assert_eq!(start.elapsed().as_millis(), 150 + 2000 + 150);
    }

    #[tokio::test]
    async fn test_session_failure_emits_failed_and_stops() {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(run_debate_with(
            request(),
            RevealTiming::default(),
            tx,
            |_| async { Err(DebateError::Server { status: 500 }) },
        ));

        let events = collect(rx).await;

        assert_eq!(events.len(), 2);
        assert_eq!(events[0], SessionEvent::Requested);
        assert_eq!(
            events[1],
            SessionEvent::Failed {
                message: "Server error: 500".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_normalizes_legacy_transcript() {
        let (tx, rx) = mpsc::unbounded_channel();
        let response = DebateResponse {
            transcript: Transcript::Legacy(
                "Ada: point one\n\nGrace: counter one\n\nAda: point two".to_string(),
            ),
            figure: None,
        };

        tokio::spawn(run_debate_with(
            request(),
            RevealTiming::default(),
            tx,
            move |_| async move { Ok(response) },
        ));

        let events = collect(rx).await;
        assert_eq!(events[1], SessionEvent::Received { total: 3 });

        let placed: Vec<(&Exchange, Column)> = events
            .iter()
            .filter_map(|e| match e {
                SessionEvent::Placed {
                    exchange, column, ..
                } => Some((exchange, *column)),
                _ => None,
            })
            .collect();

        // Legacy fragments get synthesized speakers and turn numbers
        assert_eq!(placed[0].0.speaker, "Ada");
        assert_eq!(placed[0].0.turn, 1);
        assert_eq!(placed[1].0.speaker, "Grace");
        assert_eq!(placed[1].0.turn, 1);
        assert_eq!(placed[2].0.speaker, "Ada");
        assert_eq!(placed[2].0.turn, 2);
        assert_eq!(
            placed.iter().map(|(_, c)| *c).collect::<Vec<_>>(),
            vec![Column::Left, Column::Right, Column::Left]
        );
    }

    #[tokio::test]
    async fn test_session_empty_transcript_completes_immediately() {
        let (tx, rx) = mpsc::unbounded_channel();
        let response = DebateResponse {
            transcript: Transcript::Legacy(String::new()),
            figure: None,
        };

        tokio::spawn(run_debate_with(
            request(),
            RevealTiming::default(),
            tx,
            move |_| async move { Ok(response) },
        ));

        let events = collect(rx).await;

        assert_eq!(
            events,
            vec![
                SessionEvent::Requested,
                SessionEvent::Received { total: 0 },
                SessionEvent::Completed { figure: None },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_forwards_figure_on_completion() {
        let (tx, rx) = mpsc::unbounded_channel();
        let figure = FigureSpec {
            kind: "bar".to_string(),
            labels: vec!["studies".to_string()],
            values: vec![7.0],
        };
        let response = DebateResponse {
            transcript: Transcript::Structured(vec![Exchange {
                speaker: "Ada".to_string(),
                statement: "Only point.".to_string(),
                turn: 1,
            }]),
            figure: Some(figure.clone()),
        };

        tokio::spawn(run_debate_with(
            request(),
            RevealTiming::default(),
            tx,
            move |_| async move { Ok(response) },
        ));

        let events = collect(rx).await;
        assert_eq!(
            events.last(),
            Some(&SessionEvent::Completed {
                figure: Some(figure)
            })
        );
    }
}
