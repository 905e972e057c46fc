//! # TUI UI Components
//!
//! Ratatui-based UI rendering for each screen.

mod chart;
mod debate;
mod help;

pub use chart::render_chart;
pub use debate::render_debate;
pub use help::render_help;

use crate::tui::{App, Screen};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};

/// Main render function - dispatches to screen-specific renderers
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    // Render tab bar
    render_tabs(frame, app, chunks[0]);

    // Render current screen
    match app.current_screen {
        Screen::Debate => render_debate(frame, app, chunks[1]),
        Screen::Chart => render_chart(frame, app, chunks[1]),
        Screen::Help => render_help(frame, chunks[1]),
    }

    // Render status bar
    render_status_bar(frame, app, chunks[2]);

    // The alert popup blocks everything until dismissed, so it paints last
    render_alert(frame, app);
}

/// Render the tab bar
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .map(|s| {
            let style = if *s == app.current_screen {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(format!("[{}] {}", s.key(), s.title())).style(style)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Expert Chatbots "),
        )
        .select(
            Screen::all()
                .iter()
                .position(|s| *s == app.current_screen)
                .unwrap_or(0),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow));

    frame.render_widget(tabs, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let session_status = if app.busy {
        Span::styled("● Generating debate...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("● Ready", Style::default().fg(Color::Green))
    };

    let mode_status = match app.input_mode {
        crate::tui::app::InputMode::Normal => Span::raw(""),
        crate::tui::app::InputMode::Editing => Span::styled(
            " [EDITING] ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    };

    let help_hint = Span::styled(" q:Quit ?:Help ", Style::default().fg(Color::DarkGray));

    // Explicit status wins; otherwise show the latest activity entry
    let message = if let Some(status) = &app.status_message {
        Span::styled(format!(" {} ", status), Style::default().fg(Color::Green))
    } else if let Some(activity) = app.activity_log.last() {
        Span::styled(format!(" {} ", activity), Style::default().fg(Color::Gray))
    } else {
        Span::raw("")
    };

    let status_line = Line::from(vec![
        session_status,
        Span::raw(" | "),
        mode_status,
        message,
        Span::raw(" "),
        help_hint,
    ]);

    let paragraph = Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render the blocking alert popup, if one is up
fn render_alert(frame: &mut Frame, app: &App) {
    let Some(message) = &app.alert else {
        return;
    };

    let area = centered_rect(60, 30, frame.area());

    let lines = vec![
        Line::from(""),
        Line::from(message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Alert ")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Helper to create a block with title
pub fn titled_block(title: &str) -> Block {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
}

/// Centered popup rect taking the given percentages of `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
