pub mod help;
pub mod ui;

pub use help::HELP_ROWS;
pub use ui::{AppMode, ConnectionStatus, MenuItem, RoomAction, ServiceAction};
