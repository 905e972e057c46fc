//! # Chart Model
//!
//! Turns the figure payload riding along with a transcript into something the
//! chart pane can draw, and owns the one-at-a-time lifecycle of the rendered
//! instance. The previous chart is always destroyed before a new one is
//! built; the slot that enforces this is plain owned state handed to the
//! renderer, not a module-level global.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.2.0: Single-slot ownership replaces the module-level chart handle
//! - 1.1.0: Line charts joined bar charts
//! - 1.0.0: Bar chart with the fixed two-color palette

use crate::core::error::{DebateError, DebateResult};
use crate::transcript::FigureSpec;

/// Dataset label shown in the chart title.
pub const DATASET_LABEL: &str = "Research Evidence";

/// The two fixed color swatches, applied positionally. RGB for #2b2d42 and
/// #ef233c.
pub const PALETTE: [(u8, u8, u8); 2] = [(0x2b, 0x2d, 0x42), (0xef, 0x23, 0x3c)];

/// Supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

impl ChartKind {
    /// Resolve the kind the server named. Anything else is a render error
    /// that propagates unrecovered to the submit handler.
    pub fn parse(kind: &str) -> DebateResult<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            _ => Err(DebateError::ChartRender {
                kind: kind.to_string(),
            }),
        }
    }
}

/// A chart ready to draw: kind plus positional (label, value) points.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub kind: ChartKind,
    pub points: Vec<(String, f64)>,
}

impl ChartModel {
    /// Build a model from figure data. Labels and values pair positionally;
    /// an unpaired surplus on either side is dropped, which is how the
    /// charting layer treats them anyway.
    pub fn build(figure: &FigureSpec) -> DebateResult<Self> {
        let kind = ChartKind::parse(&figure.kind)?;

        let points = figure
            .labels
            .iter()
            .cloned()
            .zip(figure.values.iter().copied())
            .collect();

        Ok(ChartModel { kind, points })
    }

    /// Value-axis bounds. The floor is forced to zero regardless of the data.
    pub fn value_bounds(&self) -> [f64; 2] {
        let max = self
            .points
            .iter()
            .map(|(_, v)| *v)
            .fold(0.0_f64, f64::max);

        [0.0, if max > 0.0 { max } else { 1.0 }]
    }

    /// Positional swatch for point `index`.
    pub fn color_for(index: usize) -> (u8, u8, u8) {
        PALETTE[index % PALETTE.len()]
    }
}

/// Holder for the at-most-one rendered chart instance.
///
/// Acquire-destroy-reacquire: [`ChartSlot::render`] releases the previous
/// instance before constructing the next, so a failed build leaves the slot
/// empty rather than showing a stale chart.
#[derive(Debug, Default)]
pub struct ChartSlot {
    instance: Option<ChartModel>,
}

impl ChartSlot {
    pub fn new() -> Self {
        ChartSlot::default()
    }

    /// Replace the rendered chart with one built from `figure`.
    pub fn render(&mut self, figure: &FigureSpec) -> DebateResult<()> {
        self.instance = None;
        self.instance = Some(ChartModel::build(figure)?);
        Ok(())
    }

    /// The current instance, if one is rendered.
    pub fn get(&self) -> Option<&ChartModel> {
        self.instance.as_ref()
    }

    pub fn is_rendered(&self) -> bool {
        self.instance.is_some()
    }

    /// Drop the current instance without rendering a new one.
    pub fn clear(&mut self) {
        self.instance = None;
    }
}
