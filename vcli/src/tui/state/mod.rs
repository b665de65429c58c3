//! State management for the TUI application
//!
//! The application state is split by screen; [`App`] owns all of it.

pub mod app_state;
pub mod device_state;
pub mod list_state;
pub mod quick_state;
pub mod service_state;
pub mod ui_state;

// Re-export the main App struct
pub use app_state::App;
pub use device_state::{device_info_rows, DeviceScreen};
pub use list_state::{Busy, ListScreen};
