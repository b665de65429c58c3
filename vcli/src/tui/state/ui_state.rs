//! UI-related state management

use chrono::{DateTime, Local};
use ratatui::widgets::{ListState, TableState};
use std::time::Duration;

use crate::tui::forms::ConfirmDialog;
use crate::tui::types::{AppMode, ConnectionStatus, MenuItem};
use vcli_core::VcliConfig;

#[derive(Debug)]
pub struct UiState {
    // Core UI state
    pub mode: AppMode,
    pub should_quit: bool,

    /// Bumped on every navigation; timers and results from older epochs are
    /// dropped.
    pub epoch: u64,
    /// A fetch for the current screen is outstanding
    pub fetch_in_flight: bool,
    /// A mutation landed while that fetch was outstanding
    pub refetch_pending: bool,

    // Connection
    pub connection_status: ConnectionStatus,
    pub last_updated: Option<DateTime<Local>>,
    pub remote_host: Option<String>,

    // Messages and dialogs
    pub status_message: Option<String>,
    pub confirm_dialog: Option<ConfirmDialog>,

    // Static screens
    pub menu_state: ListState,
    pub help_state: TableState,

    // Timers
    pub poll_interval: Duration,
    pub progress_interval: Duration,
    pub service_progress_interval: Duration,
}

impl UiState {
    pub fn new(config: &VcliConfig) -> Self {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        let remote_host = match &config.endpoint {
            vcli_core::Endpoint::Remote { host, .. } => Some(host.clone()),
            vcli_core::Endpoint::Local => None,
        };

        Self {
            mode: AppMode::Home,
            should_quit: false,
            epoch: 0,
            fetch_in_flight: false,
            refetch_pending: false,
            connection_status: ConnectionStatus::Unknown,
            last_updated: None,
            remote_host,
            status_message: None,
            confirm_dialog: None,
            menu_state,
            help_state: TableState::default(),
            poll_interval: config.poll_interval,
            progress_interval: config.progress_interval,
            service_progress_interval: config.service_progress_interval,
        }
    }

    pub fn selected_menu_item(&self) -> MenuItem {
        let index = self.menu_state.selected().unwrap_or(0);
        MenuItem::ALL.get(index).copied().unwrap_or(MenuItem::Refresh)
    }

    pub fn menu_next(&mut self) {
        let index = self.menu_state.selected().unwrap_or(0);
        if index + 1 < MenuItem::ALL.len() {
            self.menu_state.select(Some(index + 1));
        }
    }

    pub fn menu_previous(&mut self) {
        let index = self.menu_state.selected().unwrap_or(0);
        self.menu_state.select(Some(index.saturating_sub(1)));
    }

    /// Record the outcome of a screen fetch for the status bar.
    pub fn record_fetch(&mut self, ok: bool) {
        self.fetch_in_flight = false;
        if ok {
            self.connection_status = ConnectionStatus::Connected;
            self.last_updated = Some(Local::now());
        } else {
            self.connection_status = ConnectionStatus::Error;
        }
    }
}
