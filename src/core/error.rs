//! Error types for the debate client.
//!
//! Every failure a submission can hit is one of these kinds; the TUI surfaces
//! whichever one reaches the submit handler as a blocking alert, using the
//! display text verbatim.

/// Debate client errors.
#[derive(Debug, thiserror::Error)]
pub enum DebateError {
    /// Transport-level failure before any usable response arrived.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status code.
    #[error("Server error: {status}")]
    Server { status: u16 },

    /// The body could not be read as JSON. The usual culprit is a reverse
    /// proxy handing back an HTML error page.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// The body parsed as JSON but matches neither known response shape.
    #[error("Invalid response format: expected an \"exchanges\" list or a \"debate\" string")]
    InvalidResponseFormat,

    /// The figure named a chart kind the renderer does not support.
    #[error("Unsupported chart type: {kind}")]
    ChartRender { kind: String },
}

impl DebateError {
    /// Malformed-response error for a body that opens like an HTML document.
    pub fn html_body() -> Self {
        DebateError::MalformedResponse {
            message: "body is an HTML page, not JSON".to_string(),
        }
    }
}

/// Result alias used throughout the library core.
pub type DebateResult<T> = Result<T, DebateError>;
