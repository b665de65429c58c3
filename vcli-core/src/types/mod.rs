//! Domain types shared by the client and the TUI

pub mod device;
pub mod iptable;
pub mod program;
pub mod room;
pub mod token;

pub use device::DeviceInfo;
pub use iptable::{sort_ip_table, IpTableEntry};
pub use program::{
    sorted_programs, ProgramDeleteResult, ProgramEntry, ProgramFileKind, ProgramLibrary,
    ProgramOptions, ProgramUploadResult,
};
pub use room::{
    join_rooms, ProgramInstance, ProgramInstanceLibrary, Room, RoomCreatedResult, RoomOptions,
    RoomStatus,
};
pub use token::{ApiToken, TokenStatus};
