//! Main application state
//!
//! [`App`] is the single owner of everything on screen. It is driven only by
//! [`App::handle_event`], which updates state synchronously and returns the
//! [`Command`]s the runner should execute. Every navigation bumps the epoch,
//! and ticks or results stamped with an older epoch are dropped, so a late
//! answer can never land on a screen other than the one that asked for it.

use tracing::{debug, info, warn};

use vcli_core::types::{ApiToken, IpTableEntry, ProgramEntry, Room};
use vcli_core::{VcliConfig, VcliResult};

use super::device_state::DeviceScreen;
use super::list_state::ListScreen;
use super::quick_state::QuickScreen;
use super::service_state::ServiceScreen;
use super::ui_state::UiState;
use crate::cli::QuickAction;
use crate::tui::commands::Command;
use crate::tui::events::{Event, Response};
use crate::tui::forms::{Form, ProgramForm, RoomForm, TokenForm};
use crate::tui::types::AppMode;

#[derive(Debug)]
pub struct App {
    pub ui: UiState,

    pub device: DeviceScreen,
    pub programs: ListScreen<ProgramEntry>,
    pub rooms: ListScreen<Room>,
    pub ip_table: ListScreen<IpTableEntry>,
    pub tokens: ListScreen<ApiToken>,
    pub service: ServiceScreen,
    pub quick: QuickScreen,

    pub program_form: ProgramForm,
    pub room_form: RoomForm,
    pub token_form: TokenForm,
}

impl App {
    pub fn new(config: &VcliConfig, quick_action: Option<QuickAction>) -> Self {
        Self {
            ui: UiState::new(config),
            device: DeviceScreen::default(),
            programs: ListScreen::new(),
            rooms: ListScreen::new(),
            ip_table: ListScreen::new(),
            tokens: ListScreen::new(),
            service: ServiceScreen::new(),
            quick: QuickScreen::new(quick_action),
            program_form: ProgramForm::new(),
            room_form: RoomForm::new(),
            token_form: TokenForm::new(),
        }
    }

    pub fn mode(&self) -> &AppMode {
        &self.ui.mode
    }

    pub fn epoch(&self) -> u64 {
        self.ui.epoch
    }

    pub fn should_quit(&self) -> bool {
        self.ui.should_quit
    }

    /// Commands to run before the first event: the quick action if one was
    /// requested, otherwise the home screen.
    pub fn startup(&mut self) -> Vec<Command> {
        match self.quick.action.clone() {
            Some(action) => {
                self.navigate(AppMode::QuickAction);
                self.quick.start();
                vec![
                    Command::QuickAction(action),
                    Command::ScheduleProgress(self.ui.progress_interval),
                ]
            }
            None => self.enter(AppMode::Home),
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Resize(_, _) => Vec::new(),
            Event::Tick { epoch } => {
                if self.is_stale(epoch, "tick") {
                    return Vec::new();
                }
                self.on_tick()
            }
            Event::Progress { epoch } => {
                if self.is_stale(epoch, "progress") {
                    return Vec::new();
                }
                self.on_progress()
            }
            Event::Response { epoch, response } => {
                if self.is_stale(epoch, "response") {
                    return Vec::new();
                }
                self.on_response(response)
            }
        }
    }

    fn is_stale(&self, epoch: u64, kind: &str) -> bool {
        let stale = epoch != self.ui.epoch;
        if stale {
            debug!(kind, epoch, current = self.ui.epoch, "dropping stale event");
        }
        stale
    }

    // Navigation

    /// Switch mode and start the new epoch, without touching screen data.
    fn navigate(&mut self, mode: AppMode) {
        self.ui.epoch += 1;
        self.ui.mode = mode;
        self.ui.fetch_in_flight = false;
        self.ui.refetch_pending = false;
        self.ui.confirm_dialog = None;
    }

    /// Enter a top-level screen fresh: its previous data is discarded.
    pub(crate) fn enter(&mut self, mode: AppMode) -> Vec<Command> {
        match &mode {
            AppMode::Programs => self.programs.reset(),
            AppMode::Rooms => self.rooms.reset(),
            AppMode::IpTable(_) => self.ip_table.reset(),
            AppMode::Tokens => self.tokens.reset(),
            AppMode::ServiceControl => self.service = ServiceScreen::new(),
            AppMode::DeviceInfo => self.device.table_state.select(Some(0)),
            AppMode::Help => self.ui.help_state.select(Some(0)),
            _ => {}
        }
        self.ui.status_message = None;
        self.back_to(mode)
    }

    /// Return to a screen keeping its data and selection, then refresh it.
    pub(crate) fn back_to(&mut self, mode: AppMode) -> Vec<Command> {
        self.navigate(mode);
        self.start_polling()
    }

    /// Open a modal sub-state. Polling of the parent stops with the epoch.
    pub(crate) fn open(&mut self, mode: AppMode) -> Vec<Command> {
        self.navigate(mode);
        match self.ui.mode {
            AppMode::NewRoomForm => vec![Command::FetchRoomPrograms],
            _ => Vec::new(),
        }
    }

    fn start_polling(&mut self) -> Vec<Command> {
        match self.fetch_command() {
            Some(fetch) => {
                self.ui.fetch_in_flight = true;
                vec![fetch, Command::ScheduleTick(self.ui.poll_interval)]
            }
            None => Vec::new(),
        }
    }

    /// The fetch that keeps the current screen fresh.
    pub fn fetch_command(&self) -> Option<Command> {
        match &self.ui.mode {
            AppMode::Home | AppMode::DeviceInfo => Some(Command::FetchDevice),
            AppMode::Programs => Some(Command::FetchPrograms),
            AppMode::Rooms => Some(Command::FetchRooms),
            AppMode::IpTable(room) => Some(Command::FetchIpTable(room.clone())),
            AppMode::Tokens => Some(Command::FetchTokens),
            _ => None,
        }
    }

    /// Issue the current screen's fetch now unless one is outstanding.
    pub(crate) fn refresh(&mut self) -> Vec<Command> {
        if self.ui.fetch_in_flight {
            return Vec::new();
        }
        match self.fetch_command() {
            Some(fetch) => {
                self.ui.fetch_in_flight = true;
                vec![fetch]
            }
            None => Vec::new(),
        }
    }

    // Timers

    fn on_tick(&mut self) -> Vec<Command> {
        if !self.ui.mode.polls() {
            return Vec::new();
        }
        if self.ui.fetch_in_flight {
            debug!(mode = ?self.ui.mode, "previous fetch outstanding, skipping poll");
        }
        let mut commands = self.refresh();
        commands.push(Command::ScheduleTick(self.ui.poll_interval));
        commands
    }

    fn on_progress(&mut self) -> Vec<Command> {
        let (animating, interval) = match self.ui.mode {
            AppMode::NewProgramForm | AppMode::EditProgramForm => {
                (self.program_form.submission.advance(), self.ui.progress_interval)
            }
            AppMode::NewRoomForm | AppMode::EditRoomForm => {
                (self.room_form.submission.advance(), self.ui.progress_interval)
            }
            AppMode::NewTokenForm | AppMode::EditTokenForm => {
                (self.token_form.submission.advance(), self.ui.progress_interval)
            }
            AppMode::QuickAction => (self.quick.advance(), self.ui.progress_interval),
            AppMode::ServiceControl => {
                (self.service.advance(), self.ui.service_progress_interval)
            }
            _ => (false, self.ui.progress_interval),
        };

        if animating {
            vec![Command::ScheduleProgress(interval)]
        } else {
            Vec::new()
        }
    }

    // Results

    fn on_response(&mut self, response: Response) -> Vec<Command> {
        match response {
            Response::Device(result) => {
                self.record_fetch(&result);
                self.device.apply(result);
                return self.refetch_if_pending();
            }
            Response::Programs(result) => {
                self.record_fetch(&result);
                self.programs.apply(result);
                return self.refetch_if_pending();
            }
            Response::Rooms(result) => {
                self.record_fetch(&result);
                self.rooms.apply(result);
                return self.refetch_if_pending();
            }
            Response::IpTable(result) => {
                self.record_fetch(&result);
                self.ip_table.apply(result);
                return self.refetch_if_pending();
            }
            Response::Tokens(result) => {
                self.record_fetch(&result);
                self.tokens.apply(result);
                return self.refetch_if_pending();
            }
            Response::RoomPrograms(result) => match result {
                Ok(programs) => self.room_form.set_programs(programs),
                Err(e) => {
                    warn!(error = %e, "failed to load programs for room form");
                    self.room_form.programs_error = Some(e);
                }
            },

            Response::RoomAction {
                room,
                action,
                result,
            } => {
                if let Err(e) = &result {
                    warn!(room = %room, ?action, error = %e, "room action failed");
                }
                return self.settle_and_refresh(result, |app, result| app.rooms.settle(result));
            }

            Response::ProgramSaved(result) => match result {
                Ok(saved) => {
                    info!(program_id = saved.program_id, "program saved");
                    let commands = self.back_to(AppMode::Programs);
                    self.ui.status_message = Some(format!(
                        "{} {} ({})",
                        saved.friendly_name, saved.result, saved.code
                    ));
                    return commands;
                }
                Err(e) => self.program_form.submission.fail(e),
            },
            Response::ProgramDeleted(result) => {
                let result = result.map(|deleted| {
                    self.ui.status_message =
                        Some(format!("{} ({})", deleted.result, deleted.code));
                });
                return self.settle_and_refresh(result, |app, result| app.programs.settle(result));
            }

            Response::RoomSaved(result) => match result {
                Ok(saved) => {
                    let commands = self.back_to(AppMode::Rooms);
                    self.ui.status_message = Some(format!("{} ({})", saved.message, saved.code));
                    return commands;
                }
                Err(e) => self.room_form.submission.fail(e),
            },
            Response::RoomDeleted { room, result } => {
                if result.is_ok() {
                    self.ui.status_message = Some(format!("room {} deleted", room));
                }
                return self.settle_and_refresh(result, |app, result| app.rooms.settle(result));
            }

            Response::TokenSaved(result) => match result {
                Ok(token) => {
                    let commands = self.back_to(AppMode::Tokens);
                    self.ui.status_message = Some(format!("API token saved: {}", token.token));
                    return commands;
                }
                Err(e) => self.token_form.submission.fail(e),
            },
            Response::TokenDeleted(result) => {
                if result.is_ok() {
                    self.ui.status_message = Some("API token deleted".to_string());
                }
                return self.settle_and_refresh(result, |app, result| app.tokens.settle(result));
            }

            Response::Service { action, result } => {
                if let Err(e) = &result {
                    warn!(action = action.verb(), error = %e, "service action failed");
                }
                self.service.finish(result);
            }
            Response::QuickAction(result) => {
                if let Err(e) = &result {
                    warn!(error = %e, "quick action failed");
                }
                self.quick.finish(result);
            }
        }
        Vec::new()
    }

    /// Settle a list mutation; a successful one re-fetches the screen.
    fn settle_and_refresh(
        &mut self,
        result: VcliResult<()>,
        settle: impl FnOnce(&mut Self, VcliResult<()>),
    ) -> Vec<Command> {
        let succeeded = result.is_ok();
        settle(self, result);
        if !succeeded {
            return Vec::new();
        }
        if self.ui.fetch_in_flight {
            // That fetch may predate the mutation
            self.ui.refetch_pending = true;
            return Vec::new();
        }
        self.refresh()
    }

    fn refetch_if_pending(&mut self) -> Vec<Command> {
        if std::mem::take(&mut self.ui.refetch_pending) {
            self.refresh()
        } else {
            Vec::new()
        }
    }

    fn record_fetch<T>(&mut self, result: &VcliResult<T>) {
        if let Err(e) = result {
            debug!(mode = ?self.ui.mode, error = %e, "fetch failed");
        }
        self.ui.record_fetch(result.is_ok());
    }

    /// Validate a form and mark it submitted. `None` leaves the validation
    /// error on the form.
    pub(crate) fn submit<F: Form>(form: &mut F) -> Option<F::Output> {
        match form.validate() {
            Ok(output) => {
                form.submission_mut().start();
                Some(output)
            }
            Err(e) => {
                form.submission_mut().fail(e);
                None
            }
        }
    }
}
