//! State shared by every table screen backed by a fetch

use ratatui::widgets::TableState;
use vcli_core::{VcliError, VcliResult};

/// Transient indicator for a long running action on a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Busy {
    pub message: String,
    /// Set once the appliance answered; the next fetch then clears it
    pub acknowledged: bool,
}

#[derive(Debug)]
pub struct ListScreen<T> {
    pub items: Vec<T>,
    pub table_state: TableState,
    pub error: Option<VcliError>,
    pub busy: Option<Busy>,
    pub loaded: bool,
}

impl<T> ListScreen<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            table_state: TableState::default(),
            error: None,
            busy: None,
            loaded: false,
        }
    }

    /// Forget everything fetched for a previous visit.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn apply(&mut self, result: VcliResult<Vec<T>>) {
        self.loaded = true;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                if self.busy.as_ref().map_or(false, |b| b.acknowledged) {
                    self.busy = None;
                }
                self.clamp_selection();
            }
            Err(e) => self.error = Some(e),
        }
    }

    pub fn set_busy(&mut self, message: impl Into<String>) {
        self.busy = Some(Busy {
            message: message.into(),
            acknowledged: false,
        });
    }

    /// Apply the outcome of the action behind the busy indicator.
    pub fn settle(&mut self, result: VcliResult<()>) {
        match result {
            Ok(()) => {
                if let Some(busy) = self.busy.as_mut() {
                    busy.acknowledged = true;
                }
            }
            Err(e) => {
                self.busy = None;
                self.error = Some(e);
            }
        }
    }

    pub fn selected(&self) -> Option<&T> {
        self.table_state.selected().and_then(|i| self.items.get(i))
    }

    pub fn select_next(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            if selected < self.items.len().saturating_sub(1) {
                self.table_state.select(Some(selected + 1));
            }
        } else if !self.items.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            if selected > 0 {
                self.table_state.select(Some(selected - 1));
            }
        }
    }

    fn clamp_selection(&mut self) {
        if self.items.is_empty() {
            self.table_state.select(None);
            return;
        }
        let last = self.items.len() - 1;
        let selected = self.table_state.selected().unwrap_or(0).min(last);
        self.table_state.select(Some(selected));
    }
}

impl<T> Default for ListScreen<T> {
    fn default() -> Self {
        Self::new()
    }
}
