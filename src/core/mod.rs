//! # Core Module
//!
//! Core domain configuration and error handling for the debate client.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Config + typed error enum shared by api, session and TUI layers

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::{Config, LOCAL_ENDPOINT, PUBLIC_ENDPOINT};
pub use error::{DebateError, DebateResult};
