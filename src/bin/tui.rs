//! # Expert Chatbots TUI
//!
//! Terminal client for the expert debate backend: submit a topic and two
//! expert names, watch the debate reveal into two columns, then check the
//! evidence chart.
//!
//! Usage: `cargo run --features tui --bin expertchat-tui`

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

use expertchat::api::DebateApi;
use expertchat::core::Config;
use expertchat::session;
use expertchat::transcript::RevealTiming;
use expertchat::tui::event::map_key_event;
use expertchat::tui::{App, Event, EventHandler, InputMode, KeyAction, Screen};

/// TUI refresh rate
const TICK_RATE: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.clone()),
    )
    .init();

    info!("Starting Expert Chatbots TUI ({})", config.endpoint);

    let api = DebateApi::from_config(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new();
    app.add_activity(format!("Backend: {}", config.endpoint));

    // Create event handler
    let (mut events, event_tx) = EventHandler::new(TICK_RATE);

    // Main loop
    let result = run_app(&mut terminal, &mut app, &mut events, &event_tx, &api, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!("Application error: {}", e);
        return Err(e);
    }

    info!("Expert Chatbots TUI shutdown complete");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    event_tx: &mpsc::UnboundedSender<Event>,
    api: &DebateApi,
    config: &Config,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|frame| {
            expertchat::tui::ui::render(frame, app);
        })?;

        // Handle events
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    // A showing alert swallows the first key press
                    if app.alert.is_some() {
                        app.dismiss_alert();
                        continue;
                    }
                    let action = map_key_event(key, app.input_mode == InputMode::Editing);
                    handle_action(app, action, event_tx, api, config);
                }
                Event::Session(session_event) => {
                    app.handle_session_event(session_event);
                }
                Event::Tick => {}
                Event::Resize(_, _) => {
                    // Terminal will redraw automatically
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(
    app: &mut App,
    action: KeyAction,
    event_tx: &mpsc::UnboundedSender<Event>,
    api: &DebateApi,
    config: &Config,
) {
    match action {
        KeyAction::Quit => {
            app.should_quit = true;
        }
        KeyAction::SwitchScreen(screen) => {
            app.switch_screen(screen);
            app.clear_status();
        }
        KeyAction::StartEditing => {
            if app.busy {
                app.status_message = Some("A debate is already running".to_string());
            } else {
                app.start_editing();
            }
        }
        KeyAction::StopEditing => {
            app.stop_editing();
        }
        KeyAction::NextField => {
            app.form.focus_next();
        }
        KeyAction::PreviousField => {
            app.form.focus_previous();
        }
        KeyAction::Char(c) => {
            app.form.input_char(c);
        }
        KeyAction::Backspace => {
            app.form.backspace();
        }
        KeyAction::Submit => {
            submit_debate(app, event_tx, api, config);
        }
        KeyAction::ScrollUp => {
            app.conversation.scroll_up(1);
        }
        KeyAction::ScrollDown => {
            app.conversation.scroll_down(1);
        }
        KeyAction::Back => {
            if app.current_screen != Screen::Debate {
                app.switch_screen(Screen::Debate);
            }
        }
        KeyAction::None => {}
    }
}

/// Validate the form and kick off a session. While one is running,
/// re-submission is rejected with a notice rather than queued.
fn submit_debate(
    app: &mut App,
    event_tx: &mpsc::UnboundedSender<Event>,
    api: &DebateApi,
    config: &Config,
) {
    if app.busy {
        app.status_message = Some("A debate is already running".to_string());
        return;
    }

    if let Err(msg) = app.form.validate() {
        app.status_message = Some(msg.to_string());
        return;
    }

    let request = app.form.to_request(config.turns);
    app.stop_editing();
    app.session_started();

    let (session_tx, mut session_rx) = mpsc::unbounded_channel();
    tokio::spawn(session::run_debate(
        api.clone(),
        request,
        RevealTiming::default(),
        session_tx,
    ));

    // Forward session progress into the UI event stream
    let ui_tx = event_tx.clone();
    tokio::spawn(async move {
        while let Some(event) = session_rx.recv().await {
            if ui_tx.send(Event::Session(event)).is_err() {
                break;
            }
        }
    });
}
