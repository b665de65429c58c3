//! State machine, command runner and rendering, driven without a terminal

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use vcli::cli::QuickAction;
use vcli::tui::types::{AppMode, RoomAction};
use vcli::tui::{ui, App, Command, CommandRunner, Event, Response};
use vcli_core::types::{
    ApiToken, DeviceInfo, IpTableEntry, ProgramDeleteResult, ProgramEntry, ProgramOptions,
    ProgramUploadResult, Room, RoomCreatedResult, RoomOptions, RoomStatus,
};
use vcli_core::{ApplianceApi, VcliConfig, VcliError, VcliResult};

// Fake appliance

#[derive(Default)]
struct FakeApi {
    calls: Mutex<Vec<String>>,
    programs: Vec<ProgramEntry>,
}

impl FakeApi {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApplianceApi for FakeApi {
    async fn device_info(&self) -> VcliResult<DeviceInfo> {
        self.record("device_info");
        Ok(device())
    }

    async fn programs(&self) -> VcliResult<Vec<ProgramEntry>> {
        self.record("programs");
        Ok(self.programs.clone())
    }

    async fn create_program(&self, options: &ProgramOptions) -> VcliResult<ProgramUploadResult> {
        self.record(format!("create_program {}", options.name));
        Ok(ProgramUploadResult {
            program_id: 12,
            friendly_name: options.name.clone(),
            result: "Program added".to_string(),
            code: 0,
        })
    }

    async fn edit_program(&self, options: &ProgramOptions) -> VcliResult<ProgramUploadResult> {
        self.record(format!(
            "edit_program {} {} start={}",
            options.program_id, options.app_file, options.start_now
        ));
        Ok(ProgramUploadResult {
            program_id: options.program_id,
            friendly_name: options.name.clone(),
            result: "Program updated".to_string(),
            code: 0,
        })
    }

    async fn delete_program(&self, id: i32) -> VcliResult<ProgramDeleteResult> {
        self.record(format!("delete_program {}", id));
        Ok(ProgramDeleteResult {
            result: "Program deleted".to_string(),
            code: 0,
        })
    }

    async fn rooms(&self) -> VcliResult<Vec<Room>> {
        self.record("rooms");
        Ok(vec![room("ROOM1", RoomStatus::Running)])
    }

    async fn start_room(&self, id: &str) -> VcliResult<()> {
        self.record(format!("start {}", id));
        Ok(())
    }

    async fn stop_room(&self, id: &str) -> VcliResult<()> {
        self.record(format!("stop {}", id));
        Err(VcliError::operation("Stop", 3, "room is not running"))
    }

    async fn debug_room(&self, id: &str, enable: bool) -> VcliResult<()> {
        self.record(format!("debug {} {}", id, enable));
        Ok(())
    }

    async fn create_room(&self, options: &RoomOptions) -> VcliResult<RoomCreatedResult> {
        self.record(format!(
            "create_room {} program={}",
            options.program_instance_id, options.program_library_id
        ));
        Ok(RoomCreatedResult {
            message: format!("Room {} created", options.program_instance_id),
            code: 0,
        })
    }

    async fn edit_room(&self, options: &RoomOptions) -> VcliResult<RoomCreatedResult> {
        self.record(format!("edit_room {}", options.program_instance_id));
        Ok(RoomCreatedResult {
            message: "Room updated".to_string(),
            code: 0,
        })
    }

    async fn delete_room(&self, id: &str) -> VcliResult<()> {
        self.record(format!("delete_room {}", id));
        Ok(())
    }

    async fn ip_table(&self, room_id: &str) -> VcliResult<Vec<IpTableEntry>> {
        self.record(format!("ip_table {}", room_id));
        Ok(Vec::new())
    }

    async fn tokens(&self) -> VcliResult<Vec<ApiToken>> {
        self.record("tokens");
        Ok(Vec::new())
    }

    async fn create_token(&self, readonly: bool, description: &str) -> VcliResult<ApiToken> {
        self.record(format!("create_token {} {}", readonly, description));
        Ok(ApiToken::default())
    }

    async fn edit_token(
        &self,
        readonly: bool,
        description: &str,
        token: &str,
    ) -> VcliResult<ApiToken> {
        self.record(format!("edit_token {} {} {}", readonly, description, token));
        Ok(ApiToken::default())
    }

    async fn delete_token(&self, token: &str) -> VcliResult<()> {
        self.record(format!("delete_token {}", token));
        Ok(())
    }
}

// Fixtures

fn device() -> DeviceInfo {
    DeviceInfo {
        name: "vc4-lab".to_string(),
        mac_address: "AA:BB:CC:00:11:22".to_string(),
        build_date: "2024-01-01".to_string(),
        application_version: "4.0.1".to_string(),
        ..DeviceInfo::default()
    }
}

fn room(id: &str, status: RoomStatus) -> Room {
    Room {
        id: id.to_string(),
        name: format!("{} name", id),
        status,
        program_id: 1,
        program_friendly: "Lobby".to_string(),
        ..Room::default()
    }
}

fn program(id: i32, friendly: &str, app_file: &str) -> ProgramEntry {
    ProgramEntry {
        program_id: id,
        friendly_name: friendly.to_string(),
        app_file: app_file.to_string(),
        ..ProgramEntry::default()
    }
}

fn token(value: &str) -> ApiToken {
    ApiToken {
        token: value.to_string(),
        description: "ci".to_string(),
        ..ApiToken::default()
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn typed(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
}

fn respond(app: &mut App, response: Response) -> Vec<Command> {
    let epoch = app.epoch();
    app.handle_event(Event::Response { epoch, response })
}

fn started_app() -> App {
    let mut app = App::new(&VcliConfig::default(), None);
    app.startup();
    app
}

fn rooms_screen(rooms: Vec<Room>) -> App {
    let mut app = started_app();
    app.handle_event(key(KeyCode::Char('r')));
    respond(&mut app, Response::Rooms(Ok(rooms)));
    app
}

// State machine

#[test]
fn test_startup_fetches_device_and_schedules_poll() {
    let config = VcliConfig::default();
    let mut app = App::new(&config, None);

    let commands = app.startup();

    assert_eq!(app.mode(), &AppMode::Home);
    assert_eq!(
        commands,
        vec![
            Command::FetchDevice,
            Command::ScheduleTick(config.poll_interval)
        ]
    );
}

#[test]
fn test_result_from_previous_screen_is_dropped() {
    let mut app = started_app();
    let home_epoch = app.epoch();

    app.handle_event(key(KeyCode::Char('r')));
    assert_eq!(app.mode(), &AppMode::Rooms);
    assert!(app.epoch() > home_epoch);

    let commands = app.handle_event(Event::Response {
        epoch: home_epoch,
        response: Response::Device(Ok(device())),
    });
    assert!(commands.is_empty());
    assert!(app.device.info.is_none());

    let stale_tick = app.handle_event(Event::Tick { epoch: home_epoch });
    assert!(stale_tick.is_empty());
}

#[test]
fn test_tick_skips_fetch_while_previous_is_outstanding() {
    let mut app = started_app();
    let poll = app.ui.poll_interval;
    let epoch = app.epoch();

    let commands = app.handle_event(Event::Tick { epoch });
    assert_eq!(commands, vec![Command::ScheduleTick(poll)]);

    respond(&mut app, Response::Device(Ok(device())));
    let commands = app.handle_event(Event::Tick { epoch });
    assert_eq!(
        commands,
        vec![Command::FetchDevice, Command::ScheduleTick(poll)]
    );
}

#[test]
fn test_failed_fetch_shows_error_until_next_success() {
    let mut app = started_app();

    respond(
        &mut app,
        Response::Device(Err(VcliError::transport("connection refused"))),
    );
    assert!(app.device.error.is_some());

    respond(&mut app, Response::Device(Ok(device())));
    assert!(app.device.error.is_none());
    assert_eq!(app.device.info, Some(device()));
}

#[test]
fn test_start_stop_follows_room_status() {
    let mut app = rooms_screen(vec![room("ROOM1", RoomStatus::Running)]);

    let commands = app.handle_event(key(KeyCode::Char('s')));
    assert_eq!(
        commands,
        vec![Command::RoomAction {
            room: "ROOM1".to_string(),
            action: RoomAction::Stop,
        }]
    );
    assert_eq!(
        app.rooms.busy.as_ref().map(|b| b.message.as_str()),
        Some("stopping room ROOM1, please wait...")
    );

    // A second press while the appliance works is ignored
    assert!(app.handle_event(key(KeyCode::Char('s'))).is_empty());

    respond(
        &mut app,
        Response::RoomAction {
            room: "ROOM1".to_string(),
            action: RoomAction::Stop,
            result: Ok(()),
        },
    );
    respond(
        &mut app,
        Response::Rooms(Ok(vec![room("ROOM1", RoomStatus::Stopped)])),
    );
    assert!(app.rooms.busy.is_none());

    let commands = app.handle_event(key(KeyCode::Char('s')));
    assert_eq!(
        commands,
        vec![Command::RoomAction {
            room: "ROOM1".to_string(),
            action: RoomAction::Start,
        }]
    );
}

#[test]
fn test_room_action_result_refetches_rooms() {
    let mut app = rooms_screen(vec![room("ROOM1", RoomStatus::Stopped)]);
    app.handle_event(key(KeyCode::Char('s')));

    let commands = respond(
        &mut app,
        Response::RoomAction {
            room: "ROOM1".to_string(),
            action: RoomAction::Start,
            result: Ok(()),
        },
    );

    assert_eq!(commands, vec![Command::FetchRooms]);
    assert!(app.rooms.busy.as_ref().is_some_and(|b| b.acknowledged));

    respond(
        &mut app,
        Response::Rooms(Ok(vec![room("ROOM1", RoomStatus::Running)])),
    );
    assert!(app.rooms.busy.is_none());
}

#[test]
fn test_delete_during_fetch_refetches_afterwards() {
    let mut app = rooms_screen(vec![room("ROOM1", RoomStatus::Stopped)]);
    app.handle_event(key(KeyCode::Char('x')));
    let commands = app.handle_event(key(KeyCode::Char('y')));
    assert!(commands.contains(&Command::FetchRooms));

    // The fetch sent with the delete is still outstanding
    let commands = respond(
        &mut app,
        Response::RoomDeleted {
            room: "ROOM1".to_string(),
            result: Ok(()),
        },
    );
    assert!(commands.is_empty());

    let commands = respond(
        &mut app,
        Response::Rooms(Ok(vec![room("ROOM1", RoomStatus::Stopped)])),
    );
    assert_eq!(commands, vec![Command::FetchRooms]);

    let commands = respond(&mut app, Response::Rooms(Ok(Vec::new())));
    assert!(commands.is_empty());
    assert!(app.rooms.items.is_empty());
}

#[test]
fn test_restart_reports_start_message() {
    let mut app = rooms_screen(vec![room("ROOM1", RoomStatus::Running)]);

    let commands = app.handle_event(key(KeyCode::Char('r')));

    assert_eq!(
        commands,
        vec![Command::RoomAction {
            room: "ROOM1".to_string(),
            action: RoomAction::Restart,
        }]
    );
    assert_eq!(
        app.rooms.busy.as_ref().map(|b| b.message.as_str()),
        Some("starting room ROOM1, please wait...")
    );
}

#[test]
fn test_failed_room_action_clears_busy_and_shows_error() {
    let mut app = rooms_screen(vec![room("ROOM1", RoomStatus::Stopped)]);
    app.handle_event(key(KeyCode::Char('s')));

    let commands = respond(
        &mut app,
        Response::RoomAction {
            room: "ROOM1".to_string(),
            action: RoomAction::Start,
            result: Err(VcliError::operation("Start", 3, "license missing")),
        },
    );

    assert!(commands.is_empty());
    assert!(app.rooms.busy.is_none());
    assert!(app.rooms.error.is_some());
}

#[test]
fn test_placeholder_tokens_cannot_be_edited() {
    let mut app = started_app();
    app.handle_event(key(KeyCode::Char('t')));
    respond(&mut app, Response::Tokens(Ok(vec![token("abc")])));

    assert!(app.handle_event(key(KeyCode::Char('e'))).is_empty());
    assert_eq!(app.mode(), &AppMode::Tokens);
    app.handle_event(key(KeyCode::Char('d')));
    assert_eq!(app.mode(), &AppMode::Tokens);

    respond(
        &mut app,
        Response::Tokens(Ok(vec![token("0123456789abcdef")])),
    );
    app.handle_event(key(KeyCode::Char('e')));
    assert_eq!(app.mode(), &AppMode::EditTokenForm);
    assert_eq!(app.token_form.token.as_deref(), Some("0123456789abcdef"));
}

#[test]
fn test_program_without_app_file_is_not_editable() {
    let mut app = started_app();
    app.handle_event(key(KeyCode::Char('p')));
    respond(&mut app, Response::Programs(Ok(vec![program(4, "Empty slot", "")])));

    app.handle_event(key(KeyCode::Char('e')));

    assert_eq!(app.mode(), &AppMode::Programs);
    assert_eq!(
        app.ui.status_message.as_deref(),
        Some("program 4 has no app file to edit")
    );
}

#[test]
fn test_invalid_program_form_shows_inline_error() {
    let mut app = started_app();
    app.handle_event(key(KeyCode::Char('p')));
    app.handle_event(key(KeyCode::Char('n')));
    assert_eq!(app.mode(), &AppMode::NewProgramForm);

    typed(&mut app, "/tmp/lab.txt");
    let commands = app.handle_event(ctrl('s'));

    assert!(commands.is_empty());
    assert!(app.program_form.submission.field_error("AppFile").is_some());
    assert!(!app.program_form.submission.is_running());
}

#[test]
fn test_valid_program_form_submits_and_returns_to_list() {
    let mut app = started_app();
    app.handle_event(key(KeyCode::Char('p')));
    app.handle_event(key(KeyCode::Char('n')));

    typed(&mut app, "/tmp/lab.cpz");
    app.handle_event(key(KeyCode::Tab));
    typed(&mut app, "Lab program");
    let commands = app.handle_event(ctrl('s'));

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        &commands[0],
        Command::CreateProgram(options)
            if options.app_file == "/tmp/lab.cpz" && options.name == "Lab program"
    ));
    assert!(app.program_form.submission.is_running());

    let commands = respond(
        &mut app,
        Response::ProgramSaved(Ok(ProgramUploadResult {
            program_id: 12,
            friendly_name: "Lab program".to_string(),
            result: "Program added".to_string(),
            code: 0,
        })),
    );
    assert_eq!(app.mode(), &AppMode::Programs);
    assert_eq!(commands[0], Command::FetchPrograms);
    assert_eq!(
        app.ui.status_message.as_deref(),
        Some("Lab program Program added (0)")
    );
}

#[test]
fn test_form_progress_stops_at_full() {
    let mut app = started_app();
    app.handle_event(key(KeyCode::Char('t')));
    app.handle_event(key(KeyCode::Char('n')));
    typed(&mut app, "ci token");
    app.handle_event(ctrl('s'));

    let epoch = app.epoch();
    let mut scheduled = 0;
    while !app.handle_event(Event::Progress { epoch }).is_empty() {
        scheduled += 1;
        assert!(scheduled < 10, "progress never settled");
    }

    assert_eq!(scheduled, 4);
    assert_eq!(app.token_form.submission.progress, Some(1.0));
}

#[test]
fn test_confirmed_room_delete() {
    let mut app = rooms_screen(vec![room("ROOM1", RoomStatus::Stopped)]);

    app.handle_event(key(KeyCode::Char('x')));
    assert_eq!(app.mode(), &AppMode::DeleteRoomConfirm);
    assert!(app.ui.confirm_dialog.is_some());

    let commands = app.handle_event(key(KeyCode::Char('y')));

    assert_eq!(app.mode(), &AppMode::Rooms);
    assert!(app.ui.confirm_dialog.is_none());
    assert!(commands.contains(&Command::DeleteRoom("ROOM1".to_string())));
    assert!(commands.contains(&Command::FetchRooms));
    assert_eq!(
        app.rooms.busy.as_ref().map(|b| b.message.as_str()),
        Some("deleting room ROOM1, please wait...")
    );
}

#[test]
fn test_cancelled_delete_keeps_data() {
    let mut app = rooms_screen(vec![room("ROOM1", RoomStatus::Stopped)]);

    app.handle_event(key(KeyCode::Char('x')));
    // Enter on the default button answers no
    let commands = app.handle_event(key(KeyCode::Enter));

    assert_eq!(app.mode(), &AppMode::Rooms);
    assert!(!commands.contains(&Command::DeleteRoom("ROOM1".to_string())));
    assert_eq!(app.rooms.items.len(), 1);
    assert!(app.rooms.busy.is_none());
}

#[test]
fn test_plain_r_does_not_open_room_form_from_programs() {
    let mut app = started_app();
    app.handle_event(key(KeyCode::Char('p')));
    respond(
        &mut app,
        Response::Programs(Ok(vec![program(1, "Lobby", "lobby.cpz")])),
    );

    assert!(app.handle_event(key(KeyCode::Char('r'))).is_empty());
    assert_eq!(app.mode(), &AppMode::Programs);

    let commands = app.handle_event(ctrl('r'));
    assert_eq!(app.mode(), &AppMode::NewRoomForm);
    assert_eq!(commands, vec![Command::FetchRoomPrograms]);
}

#[test]
fn test_room_form_from_program_preselects_it() {
    let mut app = started_app();
    app.handle_event(key(KeyCode::Char('p')));
    respond(
        &mut app,
        Response::Programs(Ok(vec![
            program(1, "Lobby", "lobby.cpz"),
            program(2, "Board room", "board.cpz"),
        ])),
    );
    app.handle_event(key(KeyCode::Down));

    let commands = app.handle_event(key(KeyCode::Char('c')));
    assert_eq!(app.mode(), &AppMode::NewRoomForm);
    assert_eq!(commands, vec![Command::FetchRoomPrograms]);

    respond(
        &mut app,
        Response::RoomPrograms(Ok(vec![
            program(1, "Lobby", "lobby.cpz"),
            program(2, "Board room", "board.cpz"),
        ])),
    );
    assert_eq!(
        app.room_form.selected_program().map(|p| p.program_id),
        Some(2)
    );
}

#[test]
fn test_quick_action_starts_before_menu() {
    let action = QuickAction::Upload {
        file: "/tmp/lab.cpz".to_string(),
        name: "Lab program".to_string(),
        override_existing: false,
    };
    let config = VcliConfig::default();
    let mut app = App::new(&config, Some(action.clone()));

    let commands = app.startup();

    assert_eq!(app.mode(), &AppMode::QuickAction);
    assert_eq!(
        commands,
        vec![
            Command::QuickAction(action),
            Command::ScheduleProgress(config.progress_interval)
        ]
    );

    respond(
        &mut app,
        Response::QuickAction(Ok(vcli::cli::QuickOutcome {
            message: "Lab program".to_string(),
            code: 0,
        })),
    );
    assert!(app.quick.outcome.is_some());
    assert_eq!(app.quick.progress, Some(1.0));

    app.handle_event(key(KeyCode::Esc));
    assert_eq!(app.mode(), &AppMode::Home);
}

#[test]
fn test_ctrl_c_quits_from_any_screen() {
    let mut app = rooms_screen(vec![room("ROOM1", RoomStatus::Running)]);
    app.handle_event(ctrl('c'));
    assert!(app.should_quit());
}

// Rendering

fn screen_text(app: &App) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_home_renders_device_rows() {
    let mut app = started_app();
    respond(&mut app, Response::Device(Ok(device())));

    let text = screen_text(&app);

    assert!(text.contains("Build Date"));
    assert!(text.contains("2024-01-01"));
    assert!(text.contains("MAC Address"));
    assert!(text.contains("AA:BB:CC:00:11:22"));
}

#[test]
fn test_connection_error_renders_hints() {
    let mut app = started_app();
    respond(
        &mut app,
        Response::Device(Err(VcliError::transport("connection refused"))),
    );

    let text = screen_text(&app);

    assert!(text.contains("ERROR"));
    assert!(text.contains("Please verify your IP address and token"));
}

#[test]
fn test_rooms_render_busy_message() {
    let mut app = rooms_screen(vec![room("ROOM1", RoomStatus::Running)]);
    app.handle_event(key(KeyCode::Char('r')));

    let text = screen_text(&app);

    assert!(text.contains("ROOM1"));
    assert!(text.contains("starting room ROOM1, please wait..."));
}

// Command runner

fn runner(api: Arc<FakeApi>) -> CommandRunner {
    let (sender, _receiver) = tokio::sync::mpsc::unbounded_channel();
    CommandRunner::new(api, sender, Duration::from_millis(5))
}

#[tokio::test]
async fn test_restart_stops_then_starts_and_reports_start() {
    let api = Arc::new(FakeApi::default());

    let response = runner(api.clone())
        .execute(Command::RoomAction {
            room: "ROOM1".to_string(),
            action: RoomAction::Restart,
        })
        .await;

    assert_eq!(api.calls(), vec!["stop ROOM1", "start ROOM1"]);
    // The failed stop is discarded; the start succeeded
    assert!(matches!(
        response,
        Some(Response::RoomAction {
            action: RoomAction::Restart,
            result: Ok(()),
            ..
        })
    ));
}

#[tokio::test]
async fn test_quick_override_edits_matching_program() {
    let api = Arc::new(FakeApi {
        programs: vec![program(3, "Lobby", "lobby.cpz"), program(5, "Gym", "gym.cpz")],
        ..FakeApi::default()
    });

    let response = runner(api.clone())
        .execute(Command::QuickAction(QuickAction::Upload {
            file: "/tmp/new_gym.cpz".to_string(),
            name: "West Gym".to_string(),
            override_existing: true,
        }))
        .await;

    assert_eq!(
        api.calls(),
        vec!["programs", "edit_program 5 /tmp/new_gym.cpz start=true"]
    );
    assert!(matches!(response, Some(Response::QuickAction(Ok(_)))));
}

#[tokio::test]
async fn test_quick_upload_and_create_room() {
    let api = Arc::new(FakeApi::default());

    let response = runner(api.clone())
        .execute(Command::QuickAction(QuickAction::UploadAndCreateRoom {
            file: "/tmp/lab.cpz".to_string(),
            name: "Lab program".to_string(),
            room: "LAB1".to_string(),
        }))
        .await;

    assert_eq!(
        api.calls(),
        vec!["create_program Lab program", "create_room LAB1 program=12"]
    );
    match response {
        Some(Response::QuickAction(Ok(outcome))) => assert_eq!(outcome.message, "Room LAB1 created"),
        other => panic!("unexpected response {:?}", other),
    }
}

#[tokio::test]
async fn test_token_save_edits_when_token_is_known() {
    let api = Arc::new(FakeApi::default());
    let runner = runner(api.clone());

    runner
        .execute(Command::SaveToken(vcli::tui::forms::TokenRequest {
            readonly: true,
            description: "ci".to_string(),
            token: Some("0123456789abcdef".to_string()),
        }))
        .await;
    runner
        .execute(Command::SaveToken(vcli::tui::forms::TokenRequest {
            readonly: false,
            description: "deploy".to_string(),
            token: None,
        }))
        .await;

    assert_eq!(
        api.calls(),
        vec![
            "edit_token true ci 0123456789abcdef",
            "create_token false deploy"
        ]
    );
}

#[tokio::test]
async fn test_timers_produce_no_response() {
    let api = Arc::new(FakeApi::default());
    let response = runner(api.clone())
        .execute(Command::ScheduleTick(Duration::from_millis(1)))
        .await;
    assert!(response.is_none());
    assert!(api.calls().is_empty());
}
