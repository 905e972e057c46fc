//! # Transcript Model & Normalizer
//!
//! Wire types for the debate-generation endpoint and the normalizer that
//! turns either historical response shape into one ordered [`Exchange`] list.
//!
//! The backend changed its response format once: early revisions returned a
//! single `debate` text block with statements separated by blank lines, the
//! current one returns an `exchanges` array with explicit speaker and turn
//! labels. Both shapes stay accepted; detection happens in exactly one place
//! ([`DebateResponse::try_from`]) instead of ad-hoc field probing at the
//! render sites.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Tagged-union shape detection with a fixed priority order
//! - 1.1.0: Structured `exchanges` shape with server-labeled speakers/turns
//! - 1.0.0: Legacy `debate` block split on blank lines

pub mod router;
pub mod sequencer;

pub use router::{Column, SpeakerRouter};
pub use sequencer::{BubbleState, RevealTiming};

use serde::{Deserialize, Serialize};

use crate::core::error::{DebateError, DebateResult};

/// Request body for one debate-generation call.
#[derive(Debug, Clone, Serialize)]
pub struct DebateRequest {
    /// Topic the experts argue about.
    pub topic: String,
    /// Name shown over the left column.
    pub expert1: String,
    /// Name shown over the right column.
    pub expert2: String,
    /// Optional turn-count hint; omitted from the wire when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turns: Option<u32>,
}

impl DebateRequest {
    /// Request with no turn-count hint.
    pub fn new(
        topic: impl Into<String>,
        expert1: impl Into<String>,
        expert2: impl Into<String>,
    ) -> Self {
        DebateRequest {
            topic: topic.into(),
            expert1: expert1.into(),
            expert2: expert2.into(),
            turns: None,
        }
    }
}

/// One normalized speaker/statement record of the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub speaker: String,
    pub statement: String,
    pub turn: u32,
}

/// Chart definition returned alongside the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSpec {
    /// Chart kind as the server names it ("bar", "line", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Category labels, positional.
    pub labels: Vec<String>,
    /// Data points, positional.
    pub values: Vec<f64>,
}

/// Response exactly as it appears on the wire. Both historical shapes overlap
/// here; callers never see this type - [`DebateResponse::try_from`] decides
/// the actual shape once and hands out the tagged union.
#[derive(Debug, Deserialize)]
pub struct RawDebateResponse {
    pub exchanges: Option<Vec<Exchange>>,
    pub debate: Option<String>,
    pub figure: Option<FigureSpec>,
}

/// The transcript half of a response, with its shape made explicit.
#[derive(Debug, Clone, PartialEq)]
pub enum Transcript {
    /// Current shape: the server already labeled speakers and turns.
    Structured(Vec<Exchange>),
    /// Legacy shape: one text block, statements separated by blank lines.
    Legacy(String),
}

/// A detected response: transcript plus the optional figure both shapes carry.
#[derive(Debug, Clone)]
pub struct DebateResponse {
    pub transcript: Transcript,
    pub figure: Option<FigureSpec>,
}

impl TryFrom<RawDebateResponse> for DebateResponse {
    type Error = DebateError;

    /// Shape detection, in priority order:
    /// 1. a non-empty `exchanges` list wins;
    /// 2. else a `debate` string;
    /// 3. else the payload matches neither known shape.
    fn try_from(raw: RawDebateResponse) -> DebateResult<Self> {
        let transcript = match (raw.exchanges, raw.debate) {
            (Some(exchanges), _) if !exchanges.is_empty() => Transcript::Structured(exchanges),
            (_, Some(debate)) => Transcript::Legacy(debate),
            _ => return Err(DebateError::InvalidResponseFormat),
        };

        Ok(DebateResponse {
            transcript,
            figure: raw.figure,
        })
    }
}

/// Parse a response body into a detected [`DebateResponse`].
///
/// A body that is not JSON at all is malformed; valid JSON that does not fit
/// the wire mirror (or fits neither shape) is an invalid response format.
pub fn parse_response(body: &str) -> DebateResult<DebateResponse> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| DebateError::MalformedResponse {
            message: e.to_string(),
        })?;

    let raw: RawDebateResponse =
        serde_json::from_value(value).map_err(|_| DebateError::InvalidResponseFormat)?;

    raw.try_into()
}

/// Delimiter between statements in a legacy transcript block.
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Normalize a transcript into the ordered Exchange list that rendering
/// consumes once, front to back.
///
/// Structured transcripts pass through untouched. Legacy blocks are split on
/// the blank-line delimiter, empty fragments dropped, and speakers
/// synthesized by position parity (expert1 first); `turn = position / 2 + 1`.
pub fn normalize(transcript: &Transcript, expert1: &str, expert2: &str) -> Vec<Exchange> {
    match transcript {
        Transcript::Structured(exchanges) => exchanges.clone(),
        Transcript::Legacy(block) => block
            .split(PARAGRAPH_DELIMITER)
            .filter(|fragment| !fragment.trim().is_empty())
            .enumerate()
            .map(|(position, fragment)| Exchange {
                speaker: if position % 2 == 0 { expert1 } else { expert2 }.to_string(),
                statement: fragment.trim().to_string(),
                turn: (position / 2 + 1) as u32,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy(block: &str) -> Transcript {
        Transcript::Legacy(block.to_string())
    }

    #[test]
    fn test_request_omits_unset_turns() {
        let request = DebateRequest {
            topic: "AI ethics".to_string(),
            expert1: "Ada".to_string(),
            expert2: "Grace".to_string(),
            turns: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"topic\""));
        assert!(!json.contains("turns"));

        let with_turns = DebateRequest {
            turns: Some(6),
            ..request
        };
        assert!(serde_json::to_string(&with_turns).unwrap().contains("\"turns\":6"));
    }

    #[test]
    fn test_detect_prefers_nonempty_exchanges() {
        let raw = RawDebateResponse {
            exchanges: Some(vec![Exchange {
                speaker: "Ada".to_string(),
                statement: "point".to_string(),
                turn: 1,
            }]),
            debate: Some("ignored legacy text".to_string()),
            figure: None,
        };

        let response = DebateResponse::try_from(raw).unwrap();
        assert!(matches!(response.transcript, Transcript::Structured(ref e) if e.len() == 1));
    }

    #[test]
    fn test_detect_empty_exchanges_falls_back_to_debate() {
        let raw = RawDebateResponse {
            exchanges: Some(vec![]),
            debate: Some("only text".to_string()),
            figure: None,
        };

        let response = DebateResponse::try_from(raw).unwrap();
        assert_eq!(response.transcript, Transcript::Legacy("only text".to_string()));
    }

    #[test]
    fn test_detect_neither_shape_fails() {
        let raw = RawDebateResponse {
            exchanges: None,
            debate: None,
            figure: None,
        };

        let err = DebateResponse::try_from(raw).unwrap_err();
        assert!(matches!(err, DebateError::InvalidResponseFormat));
    }

    #[test]
    fn test_parse_response_rejects_non_json() {
        let err = parse_response("definitely not json").unwrap_err();
        assert!(matches!(err, DebateError::MalformedResponse { .. }));
    }

    #[test]
    fn test_parse_response_rejects_wrong_shape_json() {
        // Valid JSON, but exchanges is not a list
        let err = parse_response(r#"{"exchanges": "nope"}"#).unwrap_err();
        assert!(matches!(err, DebateError::InvalidResponseFormat));
    }

    #[test]
    fn test_parse_response_carries_figure() {
        let body = r#"{
            "debate": "a\n\nb",
            "figure": {"type": "bar", "labels": ["x", "y"], "values": [1.0, 2.5]}
        }"#;

        let response = parse_response(body).unwrap();
        let figure = response.figure.unwrap();
        assert_eq!(figure.kind, "bar");
        assert_eq!(figure.labels, vec!["x", "y"]);
        assert_eq!(figure.values, vec![1.0, 2.5]);
    }

    #[test]
    fn test_normalize_structured_is_identity() {
        let exchanges = vec![
            Exchange {
                speaker: "Grace".to_string(),
                statement: "first".to_string(),
                turn: 1,
            },
            Exchange {
                speaker: "Ada".to_string(),
                statement: "second".to_string(),
                turn: 1,
            },
            Exchange {
                speaker: "Grace".to_string(),
                statement: "third".to_string(),
                turn: 2,
            },
        ];

        let normalized = normalize(
            &Transcript::Structured(exchanges.clone()),
            "Ada",
            "Grace",
        );
        assert_eq!(normalized, exchanges);
    }

    #[test]
    fn test_normalize_legacy_counts_nonempty_paragraphs() {
        // Trailing delimiter and an interior blank paragraph must not
        // produce phantom exchanges
        let block = "one\n\ntwo\n\n\n\nthree\n\n";
        let normalized = normalize(&legacy(block), "A", "B");
        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[0].statement, "one");
        assert_eq!(normalized[2].statement, "three");
    }

    #[test]
    fn test_normalize_legacy_alternates_speakers_and_derives_turns() {
        let block = "p0\n\np1\n\np2\n\np3\n\np4";
        let normalized = normalize(&legacy(block), "Ada", "Grace");

        let speakers: Vec<&str> = normalized.iter().map(|e| e.speaker.as_str()).collect();
        assert_eq!(speakers, vec!["Ada", "Grace", "Ada", "Grace", "Ada"]);

        let turns: Vec<u32> = normalized.iter().map(|e| e.turn).collect();
        assert_eq!(turns, vec![1, 1, 2, 2, 3]);
    }

    #[test]
    fn test_normalize_legacy_keeps_inline_name_prefixes_in_statements() {
        // Speaker assignment is positional; "Ada:" inside the text is not parsed
        let block = "Ada: point one\n\nGrace: counter one";
        let normalized = normalize(&legacy(block), "Ada", "Grace");

        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].speaker, "Ada");
        assert_eq!(normalized[0].turn, 1);
        assert_eq!(normalized[1].speaker, "Grace");
        assert_eq!(normalized[1].turn, 1);
    }

    #[test]
    fn test_normalize_preserves_order() {
        let block = "alpha\n\nbeta\n\ngamma";
        let normalized = normalize(&legacy(block), "A", "B");
        let statements: Vec<&str> = normalized.iter().map(|e| e.statement.as_str()).collect();
        assert_eq!(statements, vec!["alpha", "beta", "gamma"]);
    }
}
