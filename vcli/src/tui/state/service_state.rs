//! systemd service control state

use ratatui::widgets::TableState;
use vcli_core::{VcliError, VcliResult};

use crate::tui::forms::step_progress;
use crate::tui::types::ServiceAction;

#[derive(Debug)]
pub struct ServiceScreen {
    pub table_state: TableState,
    pub running: Option<ServiceAction>,
    pub progress: Option<f64>,
    pub output: Option<String>,
    pub error: Option<VcliError>,
}

impl ServiceScreen {
    pub fn new() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            table_state,
            running: None,
            progress: None,
            output: None,
            error: None,
        }
    }

    pub fn selected_action(&self) -> ServiceAction {
        let index = self.table_state.selected().unwrap_or(0);
        ServiceAction::ALL
            .get(index)
            .copied()
            .unwrap_or(ServiceAction::Stop)
    }

    pub fn select_next(&mut self) {
        let index = self.table_state.selected().unwrap_or(0);
        if index + 1 < ServiceAction::ALL.len() {
            self.table_state.select(Some(index + 1));
        }
    }

    pub fn select_previous(&mut self) {
        let index = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some(index.saturating_sub(1)));
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn start(&mut self, action: ServiceAction) {
        self.running = Some(action);
        self.progress = Some(0.0);
        self.output = None;
        self.error = None;
    }

    /// Returns true while the bar should keep animating.
    pub fn advance(&mut self) -> bool {
        self.running.is_some() && step_progress(&mut self.progress)
    }

    pub fn finish(&mut self, result: VcliResult<String>) {
        self.running = None;
        self.progress = None;
        match result {
            Ok(output) => self.output = Some(output),
            Err(e) => self.error = Some(e),
        }
    }
}

impl Default for ServiceScreen {
    fn default() -> Self {
        Self::new()
    }
}
