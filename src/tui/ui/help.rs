//! # Help UI
//!
//! Keybindings and usage help.

use crate::tui::ui::titled_block;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Render the help screen
pub fn render_help(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_keybindings(frame, chunks[0]);
    render_screen_guide(frame, chunks[1]);
}

fn render_keybindings(frame: &mut Frame, area: Rect) {
    let keybindings = vec![
        (
            "General",
            vec![
                ("q", "Quit application"),
                ("Ctrl+c", "Force quit"),
                ("?", "Show this help"),
                ("1 / 2", "Switch screens"),
                ("Esc", "Go back / dismiss"),
            ],
        ),
        (
            "Debate Form",
            vec![
                ("i / Enter", "Start editing the form"),
                ("Tab / Down", "Next field"),
                ("Shift+Tab / Up", "Previous field"),
                ("Enter", "Submit the debate"),
                ("Esc", "Stop editing"),
            ],
        ),
        (
            "Transcript",
            vec![("j / Down", "Scroll down"), ("k / Up", "Scroll up")],
        ),
    ];

    let mut lines = vec![];

    for (section, bindings) in keybindings {
        lines.push(Line::from(vec![Span::styled(
            section,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));

        for (key, desc) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<16}", key), Style::default().fg(Color::Cyan)),
                Span::raw(desc),
            ]));
        }

        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(titled_block("Keybindings"))
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_screen_guide(frame: &mut Frame, area: Rect) {
    let screens = vec![
        (
            "Debate [1]",
            vec![
                "Fill in a topic and two expert names,",
                "then submit to generate a debate.",
                "",
                "Statements appear one at a time,",
                "experts alternating left and right.",
                "",
                "Only one debate runs at a time; the",
                "form stays locked until it finishes.",
            ],
        ),
        (
            "Chart [2]",
            vec![
                "Shows the evidence figure returned",
                "with the transcript, when the backend",
                "includes one.",
                "",
                "Each new debate replaces the chart.",
            ],
        ),
    ];

    let mut lines = vec![];

    for (screen, help) in screens {
        lines.push(Line::from(vec![Span::styled(
            screen,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]));

        for line in help {
            if line.is_empty() {
                lines.push(Line::from(""));
            } else {
                lines.push(Line::from(vec![Span::raw("  "), Span::raw(line.to_string())]));
            }
        }

        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        format!("expertchat v{}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(Color::DarkGray),
    )]));
    lines.push(Line::from(vec![Span::styled(
        "Terminal client for the Expert Chatbots backend",
        Style::default().fg(Color::DarkGray),
    )]));

    let paragraph = Paragraph::new(lines)
        .block(titled_block("Screen Guide"))
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}
