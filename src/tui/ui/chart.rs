//! # Chart UI
//!
//! Renders the figure that rides along with a completed debate. Bar charts
//! use the bar widget, line charts the braille plot; both read the fixed
//! palette from the chart model.

use crate::chart::{ChartKind, ChartModel, DATASET_LABEL};
use crate::tui::ui::titled_block;
use crate::tui::App;
use ratatui::prelude::*;
use ratatui::widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph};

/// Render the chart screen
pub fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let Some(model) = app.chart_slot.get() else {
        let hint = if app.busy {
            "Generating debate..."
        } else {
            "No chart yet. Start a debate on [1] and its figure shows up here."
        };
        let paragraph = Paragraph::new(hint)
            .block(titled_block(DATASET_LABEL))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    };

    render_model(frame, model, area);
}

/// Draw a chart model into `area`. Shared by the chart screen and the strip
/// under the debate columns.
pub(super) fn render_model(frame: &mut Frame, model: &ChartModel, area: Rect) {
    match model.kind {
        ChartKind::Bar => render_bar(frame, model, area),
        ChartKind::Line => render_line(frame, model, area),
    }
}

fn palette_color(index: usize) -> Color {
    let (r, g, b) = ChartModel::color_for(index);
    Color::Rgb(r, g, b)
}

fn render_bar(frame: &mut Frame, model: &ChartModel, area: Rect) {
    let bars: Vec<Bar> = model
        .points
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            Bar::default()
                .label(Line::from(label.as_str()))
                .value(value.max(0.0).round() as u64)
                .style(Style::default().fg(palette_color(i)))
                .value_style(Style::default().fg(Color::White).bg(palette_color(i)))
        })
        .collect();

    // Fit the bars to the width, within reason
    let count = model.points.len().max(1) as u16;
    let bar_width = ((area.width.saturating_sub(2) / count).saturating_sub(2)).clamp(3, 12);

    let chart = BarChart::default()
        .block(titled_block(DATASET_LABEL))
        .bar_width(bar_width)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_line(frame: &mut Frame, model: &ChartModel, area: Rect) {
    let points: Vec<(f64, f64)> = model
        .points
        .iter()
        .enumerate()
        .map(|(i, (_, value))| (i as f64, *value))
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(palette_color(0)))
        .data(&points);

    let x_max = (model.points.len().saturating_sub(1)).max(1) as f64;
    let [y_min, y_max] = model.value_bounds();

    let x_labels: Vec<String> = model.points.iter().map(|(label, _)| label.clone()).collect();
    let y_labels = vec![
        format_value(y_min),
        format_value(y_max / 2.0),
        format_value(y_max),
    ];

    let chart = Chart::new(vec![dataset])
        .block(titled_block(DATASET_LABEL))
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(x_labels)
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels(y_labels)
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
