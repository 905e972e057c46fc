//! # TUI Application Core
//!
//! Main application state and screen navigation. Session progress arrives as
//! [`SessionEvent`]s and is folded into state here; rendering reads this
//! state and nothing else.

use crate::chart::ChartSlot;
use crate::session::SessionEvent;
use crate::tui::state::{ConversationState, DebateForm};

/// Available screens in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Debate,
    Chart,
    Help,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Debate => "Debate",
            Screen::Chart => "Chart",
            Screen::Help => "Help",
        }
    }

    pub fn key(&self) -> char {
        match self {
            Screen::Debate => '1',
            Screen::Chart => '2',
            Screen::Help => '?',
        }
    }

    pub fn all() -> &'static [Screen] {
        &[Screen::Debate, Screen::Chart, Screen::Help]
    }
}

/// Input mode for text entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Main application state
pub struct App {
    /// Current screen
    pub current_screen: Screen,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Submission form
    pub form: DebateForm,
    /// The two debate columns
    pub conversation: ConversationState,
    /// Holder for the rendered chart
    pub chart_slot: ChartSlot,
    /// True while a session is running; submissions are rejected until the
    /// running one settles
    pub busy: bool,
    /// Blocking alert; dismissed by any key
    pub alert: Option<String>,
    /// Status message for the status bar
    pub status_message: Option<String>,
    /// Activity log (recent events)
    pub activity_log: Vec<String>,
}

impl App {
    pub fn new() -> Self {
        App {
            current_screen: Screen::Debate,
            should_quit: false,
            input_mode: InputMode::Normal,
            form: DebateForm::new(),
            conversation: ConversationState::new(),
            chart_slot: ChartSlot::new(),
            busy: false,
            alert: None,
            status_message: None,
            activity_log: Vec::new(),
        }
    }

    /// Switch to a different screen
    pub fn switch_screen(&mut self, screen: Screen) {
        self.current_screen = screen;
        self.input_mode = InputMode::Normal;
    }

    /// Enter form editing mode
    pub fn start_editing(&mut self) {
        self.current_screen = Screen::Debate;
        self.input_mode = InputMode::Editing;
    }

    /// Leave form editing mode
    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Mark a new session started: columns reset under the submitted names,
    /// busy until the session settles. The previous chart stays up until the
    /// new one replaces it.
    pub fn session_started(&mut self) {
        self.busy = true;
        self.status_message = None;
        self.conversation
            .begin(self.form.expert1.trim(), self.form.expert2.trim());
        self.add_activity(format!(
            "Debate submitted: {} vs {}",
            self.form.expert1.trim(),
            self.form.expert2.trim()
        ));
    }

    /// Fold one session event into state.
    pub fn handle_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Requested => {}
            SessionEvent::Received { total } => {
                self.conversation.transcript_received();
                self.add_activity(format!("Transcript received: {} exchanges", total));
            }
            SessionEvent::Placed {
                index,
                exchange,
                column,
            } => {
                self.conversation.place(index, exchange, column);
            }
            SessionEvent::Revealed { index } => {
                self.conversation.reveal(index);
            }
            SessionEvent::Completed { figure } => {
                self.busy = false;
                match figure {
                    Some(figure) => match self.chart_slot.render(&figure) {
                        Ok(()) => {
                            self.status_message =
                                Some("Debate complete, chart ready on [2]".to_string());
                            self.add_activity("Chart rendered".to_string());
                        }
                        Err(e) => {
                            self.alert = Some(format!("Error fetching debate: {}", e));
                        }
                    },
                    None => {
                        // No figure came back; a stale chart from the last
                        // debate must not sit next to this transcript
                        self.chart_slot.clear();
                        self.status_message = Some("Debate complete".to_string());
                    }
                }
            }
            SessionEvent::Failed { message } => {
                self.busy = false;
                self.conversation.abort();
                self.alert = Some(format!("Error fetching debate: {}", message));
                self.add_activity(format!("Debate failed: {}", message));
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Add an activity log entry
    pub fn add_activity(&mut self, msg: String) {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        self.activity_log.push(format!("[{}] {}", timestamp, msg));

        // Keep only last 100 entries
        if self.activity_log.len() > 100 {
            self.activity_log.remove(0);
        }
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
