//! Keybinding dispatch
//!
//! Global bindings first, then the handler of the active mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::tui::commands::Command;
use crate::tui::forms::{
    ConfirmAction, ConfirmDialog, Form, FormKey, ProgramForm, RoomForm, TokenForm,
};
use crate::tui::state::App;
use crate::tui::types::{AppMode, MenuItem, RoomAction, ServiceAction, HELP_ROWS};

fn ctrl(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_back(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) && !ctrl(key)
}

impl App {
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) -> Vec<Command> {
        // Global keybindings
        if key.code == KeyCode::Char('c') && ctrl(&key) {
            self.ui.should_quit = true;
            return Vec::new();
        }

        match self.ui.mode.clone() {
            AppMode::Home => self.handle_home_keys(key),
            AppMode::Programs => self.handle_programs_keys(key),
            AppMode::Rooms => self.handle_rooms_keys(key),
            AppMode::IpTable(_) => self.handle_ip_table_keys(key),
            AppMode::Tokens => self.handle_tokens_keys(key),
            AppMode::DeviceInfo => self.handle_device_keys(key),
            AppMode::Help => self.handle_help_keys(key),
            AppMode::ServiceControl => self.handle_service_keys(key),
            AppMode::QuickAction => self.handle_quick_keys(key),
            AppMode::NewProgramForm | AppMode::EditProgramForm => {
                self.handle_program_form_keys(key)
            }
            AppMode::NewRoomForm | AppMode::EditRoomForm => self.handle_room_form_keys(key),
            AppMode::NewTokenForm | AppMode::EditTokenForm => self.handle_token_form_keys(key),
            AppMode::DeleteProgramConfirm
            | AppMode::DeleteRoomConfirm
            | AppMode::DeleteTokenConfirm => self.handle_confirm_dialog_keys(key),
        }
    }

    fn handle_home_keys(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.ui.should_quit = true;
                Vec::new()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.ui.menu_previous();
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.ui.menu_next();
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let item = self.ui.selected_menu_item();
                self.open_menu_item(item)
            }
            KeyCode::Char(c) => {
                let hotkey = c.to_string();
                match MenuItem::ALL
                    .iter()
                    .find(|item| !item.hotkey().is_empty() && item.hotkey() == hotkey)
                {
                    Some(item) => self.open_menu_item(*item),
                    None => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    fn open_menu_item(&mut self, item: MenuItem) -> Vec<Command> {
        match item {
            MenuItem::Refresh => self.refresh(),
            MenuItem::Programs => self.enter(AppMode::Programs),
            MenuItem::Rooms => self.enter(AppMode::Rooms),
            MenuItem::DeviceInfo => self.enter(AppMode::DeviceInfo),
            MenuItem::Authorization => self.enter(AppMode::Tokens),
            MenuItem::Service => self.enter(AppMode::ServiceControl),
            MenuItem::Help => self.enter(AppMode::Help),
        }
    }

    fn handle_programs_keys(&mut self, key: KeyEvent) -> Vec<Command> {
        if is_back(&key) {
            return self.enter(AppMode::Home);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.programs.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.programs.select_next(),
            KeyCode::Char('n') => {
                self.program_form = ProgramForm::new();
                return self.open(AppMode::NewProgramForm);
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                match self.programs.selected() {
                    Some(program) if program.has_app_file() => {
                        self.program_form = ProgramForm::edit(program);
                        return self.open(AppMode::EditProgramForm);
                    }
                    Some(program) => {
                        self.ui.status_message = Some(format!(
                            "program {} has no app file to edit",
                            program.program_id
                        ));
                    }
                    None => {}
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(program) = self.programs.selected() {
                    let dialog = ConfirmDialog::delete(ConfirmAction::DeleteProgram {
                        id: program.program_id,
                        name: program.friendly_name.clone(),
                    });
                    return self.confirm(AppMode::DeleteProgramConfirm, dialog);
                }
            }
            KeyCode::Char(c) if c == 'c' || (c == 'r' && ctrl(&key)) => {
                if let Some(program) = self.programs.selected() {
                    self.room_form = RoomForm::for_program(program);
                    return self.open(AppMode::NewRoomForm);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_rooms_keys(&mut self, key: KeyEvent) -> Vec<Command> {
        if is_back(&key) {
            return self.enter(AppMode::Home);
        }

        let selected = self.rooms.selected().cloned();
        let busy = self.rooms.busy.as_ref().map_or(false, |b| !b.acknowledged);

        match (key.code, selected) {
            (KeyCode::Up | KeyCode::Char('k'), _) => self.rooms.select_previous(),
            (KeyCode::Down | KeyCode::Char('j'), _) => self.rooms.select_next(),
            (KeyCode::Char('n'), _) => {
                self.room_form = RoomForm::new();
                return self.open(AppMode::NewRoomForm);
            }
            (KeyCode::Char('s'), Some(room)) if !busy => {
                let action = if room.status.is_active() {
                    RoomAction::Stop
                } else {
                    RoomAction::Start
                };
                return self.room_action(&room.id, action);
            }
            (KeyCode::Char('r'), Some(room)) if !busy => {
                return self.room_action(&room.id, RoomAction::Restart);
            }
            (KeyCode::Char('d'), Some(room)) if !busy => {
                return self.room_action(&room.id, RoomAction::Debug(!room.debugging));
            }
            (KeyCode::Char('e') | KeyCode::Enter, Some(room)) => {
                self.room_form = RoomForm::edit(&room);
                return self.open(AppMode::EditRoomForm);
            }
            (KeyCode::Char('x') | KeyCode::Delete, Some(room)) => {
                let dialog = ConfirmDialog::delete(ConfirmAction::DeleteRoom(room.id));
                return self.confirm(AppMode::DeleteRoomConfirm, dialog);
            }
            (KeyCode::Char('i') | KeyCode::Tab, Some(room)) => {
                return self.enter(AppMode::IpTable(room.id));
            }
            (code, _) => debug!(?code, "unhandled key on rooms screen"),
        }
        Vec::new()
    }

    fn room_action(&mut self, room: &str, action: RoomAction) -> Vec<Command> {
        self.rooms.set_busy(action.busy_message(room));
        vec![Command::RoomAction {
            room: room.to_string(),
            action,
        }]
    }

    fn handle_ip_table_keys(&mut self, key: KeyEvent) -> Vec<Command> {
        if is_back(&key) {
            return self.back_to(AppMode::Rooms);
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.ip_table.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.ip_table.select_next(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_tokens_keys(&mut self, key: KeyEvent) -> Vec<Command> {
        if is_back(&key) {
            return self.enter(AppMode::Home);
        }

        let selected = self
            .tokens
            .selected()
            .filter(|token| token.is_manageable())
            .cloned();

        match (key.code, selected) {
            (KeyCode::Up | KeyCode::Char('k'), _) => self.tokens.select_previous(),
            (KeyCode::Down | KeyCode::Char('j'), _) => self.tokens.select_next(),
            (KeyCode::Char('n'), _) => {
                self.token_form = TokenForm::new();
                return self.open(AppMode::NewTokenForm);
            }
            (KeyCode::Char('e') | KeyCode::Enter, Some(token)) => {
                self.token_form = TokenForm::edit(&token);
                return self.open(AppMode::EditTokenForm);
            }
            (KeyCode::Char('d') | KeyCode::Delete, Some(token)) => {
                let dialog = ConfirmDialog::delete(ConfirmAction::DeleteToken(token.token));
                return self.confirm(AppMode::DeleteTokenConfirm, dialog);
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_device_keys(&mut self, key: KeyEvent) -> Vec<Command> {
        if is_back(&key) {
            return self.enter(AppMode::Home);
        }
        let rows = self.device.row_count();
        scroll(&mut self.device.table_state, rows, key.code);
        Vec::new()
    }

    fn handle_help_keys(&mut self, key: KeyEvent) -> Vec<Command> {
        if is_back(&key) {
            return self.enter(AppMode::Home);
        }
        scroll(&mut self.ui.help_state, HELP_ROWS.len(), key.code);
        Vec::new()
    }

    fn handle_service_keys(&mut self, key: KeyEvent) -> Vec<Command> {
        if is_back(&key) {
            return self.enter(AppMode::Home);
        }

        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.service.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.service.select_next();
                None
            }
            KeyCode::Enter => Some(self.service.selected_action()),
            KeyCode::Char('s') if ctrl(&key) => Some(ServiceAction::Stop),
            KeyCode::Char('n') if ctrl(&key) => Some(ServiceAction::Start),
            KeyCode::Char('r') if ctrl(&key) => Some(ServiceAction::Restart),
            KeyCode::Char('l') => Some(ServiceAction::Logs),
            _ => None,
        };

        match action {
            Some(_) if self.service.is_running() => Vec::new(),
            Some(ServiceAction::Logs) => vec![Command::OpenJournal],
            Some(action) => {
                self.service.start(action);
                vec![
                    Command::Service(action),
                    Command::ScheduleProgress(self.ui.service_progress_interval),
                ]
            }
            None => Vec::new(),
        }
    }

    fn handle_quick_keys(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Esc => self.enter(AppMode::Home),
            KeyCode::Char('q') if ctrl(&key) => {
                self.ui.should_quit = true;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn handle_program_form_keys(&mut self, key: KeyEvent) -> Vec<Command> {
        match self.program_form.handle_key(key) {
            FormKey::Back => self.back_to(AppMode::Programs),
            FormKey::Submit => match App::submit(&mut self.program_form) {
                Some(options) if self.program_form.is_editing() => {
                    self.progress_commands(Command::EditProgram(options))
                }
                Some(options) => self.progress_commands(Command::CreateProgram(options)),
                None => Vec::new(),
            },
            FormKey::Handled | FormKey::Ignored => Vec::new(),
        }
    }

    fn handle_room_form_keys(&mut self, key: KeyEvent) -> Vec<Command> {
        match self.room_form.handle_key(key) {
            FormKey::Back => self.back_to(AppMode::Rooms),
            FormKey::Submit => match App::submit(&mut self.room_form) {
                Some(options) if self.room_form.is_editing() => {
                    self.progress_commands(Command::EditRoom(options))
                }
                Some(options) => self.progress_commands(Command::CreateRoom(options)),
                None => Vec::new(),
            },
            FormKey::Handled | FormKey::Ignored => Vec::new(),
        }
    }

    fn handle_token_form_keys(&mut self, key: KeyEvent) -> Vec<Command> {
        match self.token_form.handle_key(key) {
            FormKey::Back => self.back_to(AppMode::Tokens),
            FormKey::Submit => match App::submit(&mut self.token_form) {
                Some(request) => self.progress_commands(Command::SaveToken(request)),
                None => Vec::new(),
            },
            FormKey::Handled | FormKey::Ignored => Vec::new(),
        }
    }

    fn progress_commands(&self, command: Command) -> Vec<Command> {
        vec![command, Command::ScheduleProgress(self.ui.progress_interval)]
    }

    fn confirm(&mut self, mode: AppMode, dialog: ConfirmDialog) -> Vec<Command> {
        let commands = self.open(mode);
        self.ui.confirm_dialog = Some(dialog);
        commands
    }

    fn handle_confirm_dialog_keys(&mut self, key: KeyEvent) -> Vec<Command> {
        let Some(dialog) = self.ui.confirm_dialog.as_mut() else {
            return self.enter(AppMode::Home);
        };

        let confirmed = match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                dialog.toggle();
                return Vec::new();
            }
            KeyCode::Char('y') => true,
            KeyCode::Char('n') | KeyCode::Esc => false,
            KeyCode::Enter => dialog.selected,
            _ => return Vec::new(),
        };

        let action = dialog.action.clone();
        let parent = match &action {
            ConfirmAction::DeleteProgram { .. } => AppMode::Programs,
            ConfirmAction::DeleteRoom(_) => AppMode::Rooms,
            ConfirmAction::DeleteToken(_) => AppMode::Tokens,
        };
        let mut commands = self.back_to(parent);
        if !confirmed {
            return commands;
        }

        match action {
            ConfirmAction::DeleteProgram { id, name } => {
                self.programs
                    .set_busy(format!("deleting program {}, please wait...", name));
                commands.push(Command::DeleteProgram(id));
            }
            ConfirmAction::DeleteRoom(room) => {
                self.rooms
                    .set_busy(format!("deleting room {}, please wait...", room));
                commands.push(Command::DeleteRoom(room));
            }
            ConfirmAction::DeleteToken(token) => {
                self.tokens.set_busy("deleting API token, please wait...");
                commands.push(Command::DeleteToken(token));
            }
        }
        commands
    }
}

fn scroll(state: &mut ratatui::widgets::TableState, rows: usize, code: KeyCode) {
    let current = state.selected().unwrap_or(0);
    match code {
        KeyCode::Up | KeyCode::Char('k') => state.select(Some(current.saturating_sub(1))),
        KeyCode::Down | KeyCode::Char('j') if current + 1 < rows => {
            state.select(Some(current + 1))
        }
        _ => {}
    }
}
