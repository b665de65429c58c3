//! Form definitions for the TUI

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vcli_core::config::PROGRESS_STEP;
use vcli_core::{VcliError, VcliResult};

pub mod program;
pub mod room;
pub mod token;

pub use program::{ProgramField, ProgramForm};
pub use room::{RoomField, RoomForm};
pub use token::{TokenField, TokenForm, TokenRequest};

/// Deletion a confirm dialog guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteProgram { id: i32, name: String },
    DeleteRoom(String),
    DeleteToken(String),
}

#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub is_dangerous: bool,
    pub action: ConfirmAction,
    /// True while the confirm button is highlighted
    pub selected: bool,
}

impl ConfirmDialog {
    pub fn delete(action: ConfirmAction) -> Self {
        let (kind, name) = match &action {
            ConfirmAction::DeleteProgram { name, .. } => ("program", name.clone()),
            ConfirmAction::DeleteRoom(room) => ("room", room.clone()),
            ConfirmAction::DeleteToken(token) => ("API token", token.clone()),
        };

        Self {
            title: format!("Delete {}", kind),
            message: format!("Are you sure you want to delete {} '{}'?", kind, name),
            confirm_text: "Yes".to_string(),
            cancel_text: "No".to_string(),
            is_dangerous: true,
            action,
            selected: false,
        }
    }

    pub fn toggle(&mut self) {
        self.selected = !self.selected;
    }
}

/// Progress and error of a form that was submitted.
#[derive(Debug, Default)]
pub struct Submission {
    pub progress: Option<f64>,
    pub error: Option<VcliError>,
}

impl Submission {
    pub fn start(&mut self) {
        self.progress = Some(0.0);
        self.error = None;
    }

    pub fn is_running(&self) -> bool {
        self.progress.is_some()
    }

    pub fn advance(&mut self) -> bool {
        step_progress(&mut self.progress)
    }

    pub fn fail(&mut self, error: VcliError) {
        self.progress = None;
        self.error = Some(error);
    }

    /// Validation message for the field with wire name `key`, if any.
    pub fn field_error(&self, key: &str) -> Option<&str> {
        match &self.error {
            Some(VcliError::Validation { field, message }) if field == key => Some(message),
            _ => None,
        }
    }

    /// Errors that do not belong to a single field.
    pub fn general_error(&self) -> Option<&VcliError> {
        match &self.error {
            Some(VcliError::Validation { .. }) | None => None,
            Some(other) => Some(other),
        }
    }
}

/// What a key press asks of the form's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    Submit,
    Back,
    Handled,
    Ignored,
}

/// Behaviour shared by every form: field focus, editing and validation.
pub trait Form {
    type Output;

    fn field_count(&self) -> usize;
    fn focus(&self) -> usize;
    fn set_focus(&mut self, index: usize);

    /// Apply an editing key to the focused field.
    fn edit(&mut self, key: KeyEvent) -> bool;

    /// Move a selector field; forms without one ignore it.
    fn cycle(&mut self, _forward: bool) {}

    fn reset(&mut self);
    fn submission(&self) -> &Submission;
    fn submission_mut(&mut self) -> &mut Submission;
    fn validate(&self) -> VcliResult<Self::Output>;

    fn next_field(&mut self) {
        let count = self.field_count();
        self.set_focus((self.focus() + 1) % count);
    }

    fn previous_field(&mut self) {
        let count = self.field_count();
        self.set_focus((self.focus() + count - 1) % count);
    }

    fn is_last_field(&self) -> bool {
        self.focus() + 1 == self.field_count()
    }

    fn handle_key(&mut self, key: KeyEvent) -> FormKey {
        if key.code == KeyCode::Esc {
            return FormKey::Back;
        }
        if self.submission().is_running() {
            return FormKey::Ignored;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => FormKey::Submit,
            KeyCode::Char('n') if ctrl => {
                self.reset();
                FormKey::Handled
            }
            KeyCode::Enter if self.is_last_field() => FormKey::Submit,
            KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                FormKey::Handled
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous_field();
                FormKey::Handled
            }
            KeyCode::Left => {
                self.cycle(false);
                FormKey::Handled
            }
            KeyCode::Right => {
                self.cycle(true);
                FormKey::Handled
            }
            _ if self.edit(key) => FormKey::Handled,
            _ => FormKey::Ignored,
        }
    }
}

/// Advance a progress bar one step. Returns true while it should keep
/// animating.
pub fn step_progress(progress: &mut Option<f64>) -> bool {
    match progress.as_mut() {
        Some(value) => {
            *value = (*value + PROGRESS_STEP).min(1.0);
            *value < 1.0
        }
        None => false,
    }
}

/// Apply a printable key or backspace to a text value.
pub fn edit_text(value: &mut String, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            value.push(c);
            true
        }
        KeyCode::Backspace => {
            value.pop();
            true
        }
        _ => false,
    }
}

pub fn checkbox(value: bool) -> String {
    let mark = if value { "[x]" } else { "[ ]" };
    mark.to_string()
}

/// Space flips a boolean field.
pub fn edit_flag(value: &mut bool, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char(' ') {
        *value = !*value;
        true
    } else {
        false
    }
}
