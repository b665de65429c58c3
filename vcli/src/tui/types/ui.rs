//! UI-related types for the TUI

use ratatui::style::Color;

/// Every screen the TUI can show. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    // Top-level screens
    Home,
    Programs,
    Rooms,
    DeviceInfo,
    IpTable(String),
    Tokens,
    ServiceControl,
    Help,
    QuickAction,

    // Modal sub-states
    NewProgramForm,
    EditProgramForm,
    DeleteProgramConfirm,
    NewRoomForm,
    EditRoomForm,
    DeleteRoomConfirm,
    NewTokenForm,
    EditTokenForm,
    DeleteTokenConfirm,
}

impl AppMode {
    /// Screens that keep their data fresh with poll ticks.
    pub fn polls(&self) -> bool {
        matches!(
            self,
            AppMode::Home
                | AppMode::Programs
                | AppMode::Rooms
                | AppMode::DeviceInfo
                | AppMode::IpTable(_)
                | AppMode::Tokens
        )
    }

    pub fn is_form(&self) -> bool {
        matches!(
            self,
            AppMode::NewProgramForm
                | AppMode::EditProgramForm
                | AppMode::NewRoomForm
                | AppMode::EditRoomForm
                | AppMode::NewTokenForm
                | AppMode::EditTokenForm
        )
    }

    pub fn is_confirm(&self) -> bool {
        matches!(
            self,
            AppMode::DeleteProgramConfirm | AppMode::DeleteRoomConfirm | AppMode::DeleteTokenConfirm
        )
    }

    pub fn title(&self) -> String {
        match self {
            AppMode::Home => "Home".to_string(),
            AppMode::Programs => "Programs".to_string(),
            AppMode::Rooms => "Rooms".to_string(),
            AppMode::DeviceInfo => "Device Information".to_string(),
            AppMode::IpTable(room) => format!("IP Table {}", room),
            AppMode::Tokens => "Authorization".to_string(),
            AppMode::ServiceControl => "System Service".to_string(),
            AppMode::Help => "Help".to_string(),
            AppMode::QuickAction => "Quick Action".to_string(),
            AppMode::NewProgramForm => "New Program".to_string(),
            AppMode::EditProgramForm => "Edit Program".to_string(),
            AppMode::DeleteProgramConfirm => "Delete Program".to_string(),
            AppMode::NewRoomForm => "New Room".to_string(),
            AppMode::EditRoomForm => "Edit Room".to_string(),
            AppMode::DeleteRoomConfirm => "Delete Room".to_string(),
            AppMode::NewTokenForm => "New API Token".to_string(),
            AppMode::EditTokenForm => "Edit API Token".to_string(),
            AppMode::DeleteTokenConfirm => "Delete API Token".to_string(),
        }
    }
}

/// Entries of the home menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Refresh,
    Programs,
    Rooms,
    DeviceInfo,
    Authorization,
    Service,
    Help,
}

impl MenuItem {
    pub const ALL: [MenuItem; 7] = [
        MenuItem::Refresh,
        MenuItem::Programs,
        MenuItem::Rooms,
        MenuItem::DeviceInfo,
        MenuItem::Authorization,
        MenuItem::Service,
        MenuItem::Help,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Refresh => "Refresh",
            MenuItem::Programs => "Manage Programs",
            MenuItem::Rooms => "Manage Rooms",
            MenuItem::DeviceInfo => "Device Information",
            MenuItem::Authorization => "Authorization",
            MenuItem::Service => "System Service",
            MenuItem::Help => "Help",
        }
    }

    pub fn hotkey(self) -> &'static str {
        match self {
            MenuItem::Refresh => "",
            MenuItem::Programs => "p",
            MenuItem::Rooms => "r",
            MenuItem::DeviceInfo => "i",
            MenuItem::Authorization => "t",
            MenuItem::Service => "s",
            MenuItem::Help => "?",
        }
    }
}

/// systemd verbs the service screen can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    Stop,
    Start,
    Restart,
    Logs,
}

impl ServiceAction {
    pub const ALL: [ServiceAction; 4] = [
        ServiceAction::Stop,
        ServiceAction::Start,
        ServiceAction::Restart,
        ServiceAction::Logs,
    ];

    pub fn verb(self) -> &'static str {
        match self {
            ServiceAction::Stop => "stop",
            ServiceAction::Start => "start",
            ServiceAction::Restart => "restart",
            ServiceAction::Logs => "logs",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ServiceAction::Stop => "Stop the virtual control service",
            ServiceAction::Start => "Start the virtual control service",
            ServiceAction::Restart => "Restart the virtual control service",
            ServiceAction::Logs => "Follow the service journal",
        }
    }
}

/// Lifecycle actions on a single room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomAction {
    Start,
    Stop,
    Restart,
    Debug(bool),
}

impl RoomAction {
    /// Message shown while the appliance carries the action out.
    ///
    /// A restart finishes with a start, so it reports the start message.
    pub fn busy_message(self, room: &str) -> String {
        match self {
            RoomAction::Start | RoomAction::Restart => {
                format!("starting room {}, please wait...", room)
            }
            RoomAction::Stop => format!("stopping room {}, please wait...", room),
            RoomAction::Debug(true) => format!("enable debugging on room {}, please wait...", room),
            RoomAction::Debug(false) => {
                format!("disabling debugging on room {}, please wait...", room)
            }
        }
    }
}

/// Status of the connection to the appliance, derived from the last fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Unknown,
    Connected,
    Error,
}

impl ConnectionStatus {
    pub fn color(&self) -> Color {
        match self {
            ConnectionStatus::Unknown => Color::Yellow,
            ConnectionStatus::Connected => Color::Green,
            ConnectionStatus::Error => Color::Red,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ConnectionStatus::Unknown => "◌",
            ConnectionStatus::Connected => "●",
            ConnectionStatus::Error => "✗",
        }
    }
}
