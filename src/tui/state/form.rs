//! # Debate Form State
//!
//! The three-field submission form: topic plus the two expert names.

use crate::transcript::DebateRequest;

/// Fields of the submission form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Topic,
    Expert1,
    Expert2,
}

impl FormField {
    pub fn title(&self) -> &'static str {
        match self {
            FormField::Topic => "Topic",
            FormField::Expert1 => "Expert 1",
            FormField::Expert2 => "Expert 2",
        }
    }

    pub fn all() -> &'static [FormField] {
        &[FormField::Topic, FormField::Expert1, FormField::Expert2]
    }
}

/// Form state: field values plus which field has focus.
#[derive(Debug, Clone)]
pub struct DebateForm {
    pub topic: String,
    pub expert1: String,
    pub expert2: String,
    pub focus: FormField,
}

impl DebateForm {
    pub fn new() -> Self {
        DebateForm {
            topic: String::new(),
            expert1: String::new(),
            expert2: String::new(),
            focus: FormField::Topic,
        }
    }

    /// Move focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Topic => FormField::Expert1,
            FormField::Expert1 => FormField::Expert2,
            FormField::Expert2 => FormField::Topic,
        };
    }

    /// Move focus to the previous field, wrapping.
    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            FormField::Topic => FormField::Expert2,
            FormField::Expert1 => FormField::Topic,
            FormField::Expert2 => FormField::Expert1,
        };
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Topic => &self.topic,
            FormField::Expert1 => &self.expert1,
            FormField::Expert2 => &self.expert2,
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Topic => &mut self.topic,
            FormField::Expert1 => &mut self.expert1,
            FormField::Expert2 => &mut self.expert2,
        }
    }

    pub fn focused_value(&self) -> &str {
        self.value(self.focus)
    }

    pub fn input_char(&mut self, c: char) {
        self.focused_value_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_value_mut().pop();
    }

    /// All three fields must be non-blank to submit.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.topic.trim().is_empty()
            || self.expert1.trim().is_empty()
            || self.expert2.trim().is_empty()
        {
            Err("Topic and both expert names are required")
        } else {
            Ok(())
        }
    }

    /// Build the request from the trimmed field values.
    pub fn to_request(&self, turns: Option<u32>) -> DebateRequest {
        let mut request = DebateRequest::new(
            self.topic.trim(),
            self.expert1.trim(),
            self.expert2.trim(),
        );
        request.turns = turns;
        request
    }
}

impl Default for DebateForm {
    fn default() -> Self {
        Self::new()
    }
}
