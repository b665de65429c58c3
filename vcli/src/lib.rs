//! vcli: terminal administration for a Virtual Control appliance
//!
//! The appliance client and domain types live in `vcli-core`; this crate adds
//! the command-line surface and the TUI.

pub mod cli;
pub mod tui;
