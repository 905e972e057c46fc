//! # Debate UI
//!
//! Submission form and the two side-by-side transcript columns.

use crate::tui::app::InputMode;
use crate::tui::state::{Bubble, FormField};
use crate::tui::ui::titled_block;
use crate::tui::App;
use crate::transcript::BubbleState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Render the debate screen
pub fn render_debate(frame: &mut Frame, app: &App, area: Rect) {
    // The chart strip below the columns only exists once a chart does
    let mut constraints = vec![
        Constraint::Length(3), // Help bar
        Constraint::Length(3), // Form row
        Constraint::Min(0),    // Columns
    ];
    if app.chart_slot.is_rendered() {
        constraints.push(Constraint::Length(10));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_help_bar(frame, app, chunks[0]);
    render_form(frame, app, chunks[1]);
    render_columns(frame, app, chunks[2]);

    if let Some(model) = app.chart_slot.get() {
        super::chart::render_model(frame, model, chunks[3]);
    }
}

fn render_help_bar(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Editing => "Tab: Next field | Enter: Start debate | Esc: Done editing",
        InputMode::Normal => {
            if app.busy {
                "Debate in progress... | j/k: Scroll transcript"
            } else if app.conversation.is_empty() {
                "Press 'i' to fill in the form, Enter to start a debate"
            } else {
                "j/k: Scroll | i: New debate | 2: View chart"
            }
        }
    };

    let paragraph = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title(" Controls "))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    for (field, chunk) in FormField::all().iter().zip(chunks.iter()) {
        let focused = app.input_mode == InputMode::Editing && app.form.focus == *field;

        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let input = Paragraph::new(app.form.value(*field))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", field.title()))
                    .border_style(border_style),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(input, *chunk);

        if focused {
            frame.set_cursor_position(Position::new(
                chunk.x + app.form.value(*field).len() as u16 + 1,
                chunk.y + 1,
            ));
        }
    }
}

fn render_columns(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_column(
        frame,
        app,
        app.conversation.left(),
        &app.conversation.expert1,
        "Expert 1",
        Color::Cyan,
        chunks[0],
    );
    render_column(
        frame,
        app,
        app.conversation.right(),
        &app.conversation.expert2,
        "Expert 2",
        Color::Yellow,
        chunks[1],
    );
}

#[allow(clippy::too_many_arguments)]
fn render_column(
    frame: &mut Frame,
    app: &App,
    bubbles: &[Bubble],
    name: &str,
    fallback_name: &str,
    accent: Color,
    area: Rect,
) {
    let header = if name.is_empty() { fallback_name } else { name };
    let title = if bubbles.is_empty() {
        header.to_string()
    } else {
        format!("{} ({})", header, bubbles.len())
    };

    let block = titled_block(&title).border_style(Style::default().fg(accent));

    if bubbles.is_empty() {
        let hint = if app.conversation.is_thinking() {
            Paragraph::new("Thinking...")
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new("")
        };
        frame.render_widget(hint.block(block).alignment(Alignment::Center), area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for bubble in bubbles {
        match bubble.state {
            BubbleState::Pending => {
                // Placed but not yet revealed: the slot shows, the words wait
                lines.push(Line::from(Span::styled(
                    "...",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            BubbleState::Visible => {
                lines.push(Line::from(Span::styled(
                    format!("{} (turn {})", bubble.exchange.speaker, bubble.exchange.turn),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(bubble.exchange.statement.as_str()));
            }
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
        .scroll((app.conversation.scroll_offset(), 0));

    frame.render_widget(paragraph, area);
}
