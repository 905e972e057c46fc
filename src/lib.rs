// Core layer - configuration and error types
pub mod core;

// HTTP client for the debate backend
pub mod api;

// Wire model, normalization, routing, and reveal sequencing
pub mod transcript;

// Chart model and single-slot ownership
pub mod chart;

// Session driver - one debate end to end
pub mod session;

// TUI layer - terminal user interface (optional feature)
#[cfg(feature = "tui")]
pub mod tui;

// Re-export the types most callers touch
pub use api::DebateApi;
pub use chart::{ChartKind, ChartModel, ChartSlot};
pub use core::{Config, DebateError, DebateResult};
pub use session::SessionEvent;
pub use transcript::{
    Column, DebateRequest, DebateResponse, Exchange, FigureSpec, RevealTiming, SpeakerRouter,
    Transcript,
};
