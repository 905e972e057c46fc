//! # Debate API Client
//!
//! Thin HTTP client for the debate backend. One POST to the endpoint root
//! carries the topic and the two expert names; the answer is decoded through
//! [`crate::transcript::parse_response`] so both transcript shapes the
//! backend has shipped keep working.
//!
//! - **Version**: 2.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.1.0: Optional turn-count rider on the request
//! - 2.0.0: Tagged transcript decode replaced the single debate string
//! - 1.1.0: HTML error pages from the hosting platform surface as malformed
//!   responses instead of JSON decode failures
//! - 1.0.0: Initial POST client

use std::time::Duration;

use log::debug;

use crate::core::config::Config;
use crate::core::error::{DebateError, DebateResult};
use crate::transcript::{self, DebateRequest, DebateResponse};

/// Generation runs a full multi-turn debate server-side, and the free hosting
/// tier adds a cold-start penalty on top. Keep the timeout generous.
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Client for the debate generation backend.
#[derive(Debug, Clone)]
pub struct DebateApi {
    http: reqwest::Client,
    endpoint: String,
}

impl DebateApi {
    /// Create a client for `endpoint`. A trailing slash is tolerated.
    pub fn new(endpoint: impl Into<String>) -> DebateResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(DebateApi {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> DebateResult<Self> {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request a debate and decode whichever transcript shape comes back.
    ///
    /// Transport failures map to [`DebateError::Network`], non-2xx statuses
    /// to [`DebateError::Server`]. A body that opens with an HTML tag is
    /// rejected before any JSON decode is attempted, since the hosting
    /// platform answers cold starts with an error page and a 200 status.
    pub async fn generate(&self, request: &DebateRequest) -> DebateResult<DebateResponse> {
        debug!(
            "Requesting debate on '{}': '{}' vs '{}'",
            request.topic, request.expert1, request.expert2
        );

        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DebateError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        if body.trim_start().starts_with('<') {
            return Err(DebateError::html_body());
        }

        transcript::parse_response(&body)
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::transcript::Transcript;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> DebateRequest {
        DebateRequest::new("climate policy", "Dr. Smith", "Dr. Jones")
    }

    #[tokio::test]
    async fn test_generate_posts_json_and_decodes_exchanges() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!({
            "exchanges": [
                {"speaker": "Dr. Smith", "statement": "Opening point.", "turn": 1},
                {"speaker": "Dr. Jones", "statement": "Counter point.", "turn": 1}
            ],
            "figure": {"type": "bar", "labels": ["a", "b"], "values": [3.0, 5.0]}
        });

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "topic": "climate policy",
                "expert1": "Dr. Smith",
                "expert2": "Dr. Jones"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = DebateApi::new(mock_server.uri()).unwrap();
        let response = api.generate(&request()).await.expect("generate failed");

        match response.transcript {
            Transcript::Structured(ref exchanges) => {
                assert_eq!(exchanges.len(), 2);
                assert_eq!(exchanges[0].speaker, "Dr. Smith");
            }
            Transcript::Legacy(_) => panic!("expected structured transcript"),
        }
        assert!(response.figure.is_some());
    }

    #[tokio::test]
    async fn test_generate_decodes_legacy_debate_string() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!({
            "debate": "Dr. Smith: point one\n\nDr. Jones: counter one"
        });

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let api = DebateApi::new(mock_server.uri()).unwrap();
        let response = api.generate(&request()).await.expect("generate failed");

        assert!(matches!(response.transcript, Transcript::Legacy(_)));
        assert!(response.figure.is_none());
    }

    #[tokio::test]
    async fn test_generate_includes_turns_when_set() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json(serde_json::json!({
                "topic": "climate policy",
                "expert1": "Dr. Smith",
                "expert2": "Dr. Jones",
                "turns": 4
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"debate": "Dr. Smith: hi"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = DebateApi::new(mock_server.uri()).unwrap();
        let mut req = request();
        req.turns = Some(4);
        api.generate(&req).await.expect("generate failed");
    }

    #[tokio::test]
    async fn test_generate_maps_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let api = DebateApi::new(mock_server.uri()).unwrap();
        let err = api.generate(&request()).await.unwrap_err();

        assert!(matches!(err, DebateError::Server { status: 500 }));
        assert_eq!(err.to_string(), "Server error: 500");
    }

    #[tokio::test]
    async fn test_generate_rejects_html_error_page() {
        let mock_server = MockServer::start().await;

        // Render-style cold start page: HTML with a 200 status
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<!DOCTYPE html><html><body>Service waking up</body></html>"),
            )
            .mount(&mock_server)
            .await;

        let api = DebateApi::new(mock_server.uri()).unwrap();
        let err = api.generate(&request()).await.unwrap_err();

        assert!(matches!(err, DebateError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_generate_rejects_unparseable_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&mock_server)
            .await;

        let api = DebateApi::new(mock_server.uri()).unwrap();
        let err = api.generate(&request()).await.unwrap_err();

        assert!(matches!(err, DebateError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_generate_rejects_unknown_shape() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})),
            )
            .mount(&mock_server)
            .await;

        let api = DebateApi::new(mock_server.uri()).unwrap();
        let err = api.generate(&request()).await.unwrap_err();

        assert!(matches!(err, DebateError::InvalidResponseFormat));
    }

    #[tokio::test]
    async fn test_generate_maps_connection_failure_to_network() {
        // Nothing listens on the discard port
        let api = DebateApi::new("http://127.0.0.1:9").unwrap();
        let err = api.generate(&request()).await.unwrap_err();

        assert!(matches!(err, DebateError::Network(_)));
        assert!(err.to_string().starts_with("Network error:"));
    }
}
