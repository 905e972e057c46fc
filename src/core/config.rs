//! # Configuration
//!
//! Endpoint selection and tunables, loaded from the environment (with a
//! `.env` file honored via dotenvy). Every knob has a hardcoded default so
//! the client runs with no environment at all, pointed at the public
//! backend - earlier revisions of this client flipped between a local dev
//! server and the hosted one with an edit, which kept breaking deploys.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Env overrides (EXPERTCHAT_ENDPOINT / EXPERTCHAT_LOCAL / EXPERTCHAT_TURNS)
//! - 1.0.0: Hardcoded endpoint pair with a compile-time switch

use anyhow::{Context, Result};
use std::env;

/// The hosted debate-generation backend. Final revisions pin this so the
/// client works from anywhere without cross-origin surprises.
pub const PUBLIC_ENDPOINT: &str = "https://expertchatbots-backend.onrender.com";

/// Loopback endpoint for running against a local backend during development.
pub const LOCAL_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the dispatcher POSTs to.
    pub endpoint: String,
    /// Optional turn-count hint forwarded in every request.
    pub turns: Option<u32>,
    /// Default log filter for env_logger.
    pub log_level: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Precedence for the endpoint: `EXPERTCHAT_ENDPOINT` if set, else the
    /// loopback endpoint when `EXPERTCHAT_LOCAL=1`, else [`PUBLIC_ENDPOINT`].
    pub fn from_env() -> Result<Self> {
        let endpoint = match env::var("EXPERTCHAT_ENDPOINT") {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => {
                if env::var("EXPERTCHAT_LOCAL").map(|v| v == "1").unwrap_or(false) {
                    LOCAL_ENDPOINT.to_string()
                } else {
                    PUBLIC_ENDPOINT.to_string()
                }
            }
        };

        let turns = match env::var("EXPERTCHAT_TURNS") {
            Ok(raw) => Some(
                raw.parse::<u32>()
                    .with_context(|| format!("EXPERTCHAT_TURNS is not a number: {raw}"))?,
            ),
            Err(_) => None,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            endpoint,
            turns,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: PUBLIC_ENDPOINT.to_string(),
            turns: None,
            log_level: "warn".to_string(),
        }
    }
}
