//! # TUI Event Handling
//!
//! Keyboard, resize, tick, and session events funneled into one channel.

use crate::session::SessionEvent;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// TUI events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Progress from a running debate session
    Session(SessionEvent),
    /// Tick for periodic updates
    Tick,
}

/// Event handler that combines keyboard, session, and tick events
pub struct EventHandler {
    /// Event receiver
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> (Self, mpsc::UnboundedSender<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();

        // Spawn keyboard event handler
        let key_tx = tx.clone();
        std::thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if key_tx.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => {
                            if key_tx.send(Event::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                } else {
                    // Send tick on poll timeout
                    if key_tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        (EventHandler { rx }, tx)
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// No action
    None,
    /// Quit the application
    Quit,
    /// Switch to screen
    SwitchScreen(crate::tui::Screen),
    /// Enter form editing
    StartEditing,
    /// Leave form editing
    StopEditing,
    /// Submit the debate form
    Submit,
    /// Move to the next form field
    NextField,
    /// Move to the previous form field
    PreviousField,
    /// Character input
    Char(char),
    /// Backspace
    Backspace,
    /// Scroll the transcript up
    ScrollUp,
    /// Scroll the transcript down
    ScrollDown,
    /// Go back / dismiss
    Back,
}

/// Map a key event to an action
pub fn map_key_event(key: KeyEvent, in_edit_mode: bool) -> KeyAction {
    if in_edit_mode {
        // In edit mode, keys go to the form
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => KeyAction::StopEditing,
            (KeyCode::Enter, _) => KeyAction::Submit,
            (KeyCode::Tab, _) | (KeyCode::Down, _) => KeyAction::NextField,
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => KeyAction::PreviousField,
            (KeyCode::Backspace, _) => KeyAction::Backspace,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
            (KeyCode::Char(c), _) => KeyAction::Char(c),
            _ => KeyAction::None,
        }
    } else {
        // Normal mode navigation
        match (key.code, key.modifiers) {
            // Quit
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,

            // Screen switching
            (KeyCode::Char('1'), KeyModifiers::NONE) => {
                KeyAction::SwitchScreen(crate::tui::Screen::Debate)
            }
            (KeyCode::Char('2'), KeyModifiers::NONE) => {
                KeyAction::SwitchScreen(crate::tui::Screen::Chart)
            }
            (KeyCode::Char('?'), KeyModifiers::NONE) => {
                KeyAction::SwitchScreen(crate::tui::Screen::Help)
            }

            // Form entry
            (KeyCode::Char('i'), KeyModifiers::NONE) | (KeyCode::Enter, _) => {
                KeyAction::StartEditing
            }

            // Transcript scrolling
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::ScrollUp,
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::ScrollDown,

            (KeyCode::Esc, _) => KeyAction::Back,

            _ => KeyAction::None,
        }
    }
}
