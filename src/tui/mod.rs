//! # TUI Module
//!
//! Terminal user interface for the debate client: the submission form, the
//! two transcript columns, and the chart pane.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.4.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.0.0: Initial TUI with debate, chart, and help screens

pub mod app;
pub mod event;
pub mod state;
pub mod ui;

pub use app::{App, InputMode, Screen};
pub use event::{Event, EventHandler, KeyAction};
