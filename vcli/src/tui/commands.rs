//! Side effects requested by the state machine
//!
//! [`App::handle_event`](crate::tui::App::handle_event) never performs I/O.
//! It returns [`Command`]s, and the [`CommandRunner`] executes each one on
//! the tokio runtime and feeds the outcome back as an [`Event`].

use std::sync::Arc;
use std::time::Duration;
use tokio::process::Command as ProcessCommand;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use vcli_core::config::SERVICE_UNIT;
use vcli_core::types::{ProgramOptions, RoomOptions};
use vcli_core::{ApplianceApi, VcliError, VcliResult};

use crate::cli::QuickAction;
use crate::tui::events::{Event, Response};
use crate::tui::forms::TokenRequest;
use crate::tui::types::{RoomAction, ServiceAction};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchDevice,
    FetchPrograms,
    /// Programs for the room form's selector
    FetchRoomPrograms,
    FetchRooms,
    FetchIpTable(String),
    FetchTokens,

    RoomAction { room: String, action: RoomAction },
    CreateProgram(ProgramOptions),
    EditProgram(ProgramOptions),
    DeleteProgram(i32),
    CreateRoom(RoomOptions),
    EditRoom(RoomOptions),
    DeleteRoom(String),
    SaveToken(TokenRequest),
    DeleteToken(String),

    /// systemctl stop/start/restart on the appliance unit
    Service(ServiceAction),
    /// Hand the terminal to the service journal until it exits
    OpenJournal,
    QuickAction(QuickAction),

    ScheduleTick(Duration),
    ScheduleProgress(Duration),
}

/// Executes commands against the appliance and the host.
#[derive(Clone)]
pub struct CommandRunner {
    api: Arc<dyn ApplianceApi>,
    sender: UnboundedSender<Event>,
    restart_delay: Duration,
}

impl CommandRunner {
    pub fn new(
        api: Arc<dyn ApplianceApi>,
        sender: UnboundedSender<Event>,
        restart_delay: Duration,
    ) -> Self {
        Self {
            api,
            sender,
            restart_delay,
        }
    }

    /// Spawn `command`; its outcome is delivered stamped with `epoch`.
    pub fn dispatch(&self, command: Command, epoch: u64) {
        match command {
            Command::ScheduleTick(after) => {
                self.after(after, Event::Tick { epoch });
            }
            Command::ScheduleProgress(after) => {
                self.after(after, Event::Progress { epoch });
            }
            Command::OpenJournal => {
                warn!("journal must be opened by the terminal loop");
            }
            other => {
                let runner = self.clone();
                tokio::spawn(async move {
                    if let Some(response) = runner.execute(other).await {
                        runner.send(Event::Response { epoch, response });
                    }
                });
            }
        }
    }

    fn after(&self, delay: Duration, event: Event) {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(event);
        });
    }

    fn send(&self, event: Event) {
        if self.sender.send(event).is_err() {
            debug!("event loop gone, dropping command outcome");
        }
    }

    /// Run one command to completion and describe its outcome.
    ///
    /// Timers and the journal produce no response here.
    pub async fn execute(&self, command: Command) -> Option<Response> {
        let api = self.api.as_ref();

        let response = match command {
            Command::FetchDevice => Response::Device(api.device_info().await),
            Command::FetchPrograms => Response::Programs(api.programs().await),
            Command::FetchRoomPrograms => Response::RoomPrograms(api.programs().await),
            Command::FetchRooms => Response::Rooms(api.rooms().await),
            Command::FetchIpTable(room) => Response::IpTable(api.ip_table(&room).await),
            Command::FetchTokens => Response::Tokens(api.tokens().await),

            Command::RoomAction { room, action } => {
                info!(room = %room, ?action, "room action");
                let result = match action {
                    RoomAction::Start => api.start_room(&room).await,
                    RoomAction::Stop => api.stop_room(&room).await,
                    RoomAction::Restart => api.restart_room(&room, self.restart_delay).await,
                    RoomAction::Debug(enable) => api.debug_room(&room, enable).await,
                };
                Response::RoomAction {
                    room,
                    action,
                    result,
                }
            }

            Command::CreateProgram(options) => {
                info!(file = %options.app_file, name = %options.name, "creating program");
                Response::ProgramSaved(api.create_program(&options).await)
            }
            Command::EditProgram(options) => {
                info!(program_id = options.program_id, "editing program");
                Response::ProgramSaved(api.edit_program(&options).await)
            }
            Command::DeleteProgram(id) => {
                info!(program_id = id, "deleting program");
                Response::ProgramDeleted(api.delete_program(id).await)
            }

            Command::CreateRoom(options) => {
                info!(room = %options.program_instance_id, "creating room");
                Response::RoomSaved(api.create_room(&options).await)
            }
            Command::EditRoom(options) => {
                info!(room = %options.program_instance_id, "editing room");
                Response::RoomSaved(api.edit_room(&options).await)
            }
            Command::DeleteRoom(room) => {
                info!(room = %room, "deleting room");
                let result = api.delete_room(&room).await;
                Response::RoomDeleted { room, result }
            }

            Command::SaveToken(request) => {
                let result = match &request.token {
                    Some(token) => {
                        api.edit_token(request.readonly, &request.description, token)
                            .await
                    }
                    None => api.create_token(request.readonly, &request.description).await,
                };
                Response::TokenSaved(result)
            }
            Command::DeleteToken(token) => {
                info!("deleting api token");
                Response::TokenDeleted(api.delete_token(&token).await)
            }

            Command::Service(action) => Response::Service {
                action,
                result: run_systemctl(action).await,
            },
            Command::QuickAction(action) => {
                info!(action = %action.message(), "running quick action");
                Response::QuickAction(action.execute(api).await)
            }

            Command::OpenJournal | Command::ScheduleTick(_) | Command::ScheduleProgress(_) => {
                return None;
            }
        };
        Some(response)
    }
}

/// Run `systemctl {verb} virtualcontrol.service` and capture its output.
pub async fn run_systemctl(action: ServiceAction) -> VcliResult<String> {
    let verb = action.verb();
    let command_line = format!("systemctl {} {}", verb, SERVICE_UNIT);
    info!(command = %command_line, "running service command");

    let output = ProcessCommand::new("systemctl")
        .arg(verb)
        .arg(SERVICE_UNIT)
        .output()
        .await
        .map_err(|e| VcliError::service(&command_line, e.to_string()))?;

    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            Ok(format!("{} {} completed", SERVICE_UNIT, verb))
        } else {
            Ok(stdout)
        }
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!(command = %command_line, status = %output.status, "service command failed");
        Err(VcliError::service(command_line, stderr))
    }
}
