//! Program instances ("rooms") and their join with the program library

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::program::{ProgramEntry, ProgramLibrary};
use crate::error::{VcliError, VcliResult};

pub type ProgramInstanceLibrary = HashMap<String, ProgramInstance>;

/// Lifecycle state reported by the appliance for a room.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomStatus {
    Starting,
    Running,
    Stopping,
    #[default]
    Stopped,
    Aborted,
    Unknown(String),
}

impl RoomStatus {
    /// Running or on its way there; ctrl+s should stop it.
    pub fn is_active(&self) -> bool {
        matches!(self, RoomStatus::Running | RoomStatus::Starting)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoomStatus::Starting => "Starting",
            RoomStatus::Running => "Running",
            RoomStatus::Stopping => "Stopping",
            RoomStatus::Stopped => "Stopped",
            RoomStatus::Aborted => "Aborted",
            RoomStatus::Unknown(s) => s,
        }
    }
}

impl From<String> for RoomStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Starting" => RoomStatus::Starting,
            "Running" => RoomStatus::Running,
            "Stopping" => RoomStatus::Stopping,
            "Stopped" => RoomStatus::Stopped,
            "Aborted" => RoomStatus::Aborted,
            _ => RoomStatus::Unknown(value),
        }
    }
}

impl From<RoomStatus> for String {
    fn from(value: RoomStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A program instance exactly as the appliance serves it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProgramInstance {
    #[serde(rename = "id")]
    pub id: i64,
    #[serde(rename = "ProgramInstanceId")]
    pub program_instance_id: String,
    pub user_file: String,
    pub status: RoomStatus,
    pub name: String,
    #[serde(rename = "ProgramLibraryId")]
    pub program_library_id: i32,
    pub level: String,
    pub address_sets_location: bool,
    pub location: String,
    pub longitude: String,
    pub latitude: String,
    pub time_zone: String,
    pub configuration_link: String,
    pub xpanel_url: String,
    pub notes: String,
    pub debugging_enabled: bool,
}

/// A room joined with the program it runs; the model every room screen uses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub status: RoomStatus,
    pub debugging: bool,
    pub location: String,
    pub longitude: String,
    pub latitude: String,
    pub time_zone: String,
    pub address_sets_location: bool,
    pub configuration_link: String,
    pub xpanel_url: String,
    pub notes: String,
    pub user_file: String,

    pub program_id: i32,
    pub program_name: String,
    pub program_friendly: String,
    pub program_type: String,
    pub compile_date_time: String,
}

impl Room {
    pub fn new(instance: ProgramInstance, program: &ProgramEntry) -> Self {
        Self {
            id: instance.program_instance_id,
            name: instance.name,
            status: instance.status,
            debugging: instance.debugging_enabled,
            location: instance.location,
            longitude: instance.longitude,
            latitude: instance.latitude,
            time_zone: instance.time_zone,
            address_sets_location: instance.address_sets_location,
            configuration_link: instance.configuration_link,
            xpanel_url: instance.xpanel_url,
            notes: instance.notes,
            user_file: instance.user_file,
            program_id: program.program_id,
            program_name: program.program_name.clone(),
            program_friendly: program.friendly_name.clone(),
            program_type: program.program_type.clone(),
            compile_date_time: program.compile_date_time.clone(),
        }
    }
}

/// Joins every instance with its library entry.
///
/// Fails as a whole if any instance references a program id that is not in
/// the library; a partial list is never returned.
pub fn join_rooms(
    instances: ProgramInstanceLibrary,
    library: &ProgramLibrary,
) -> VcliResult<Vec<Room>> {
    let mut rooms = Vec::with_capacity(instances.len());

    for instance in instances.into_values() {
        let library_id = instance.program_library_id.to_string();
        let program = library.get(&library_id).ok_or_else(|| VcliError::UnresolvedProgram {
            room: instance.program_instance_id.clone(),
            library_id: library_id.clone(),
        })?;
        rooms.push(Room::new(instance, program));
    }

    rooms.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(rooms)
}

/// Input for creating or editing a room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomOptions {
    pub name: String,
    pub program_instance_id: String,
    pub program_library_id: i32,
    pub notes: String,
    pub location: String,
    pub time_zone: String,
    pub latitude: String,
    pub longitude: String,
    pub address_sets_location: bool,
    /// Local path of a user file to upload with the room
    pub user_file: String,
}

impl Default for RoomOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            program_instance_id: String::new(),
            program_library_id: 0,
            notes: String::new(),
            location: String::new(),
            time_zone: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            address_sets_location: true,
            user_file: String::new(),
        }
    }
}

impl RoomOptions {
    pub fn new(program_id: i32, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            program_instance_id: id.into(),
            program_library_id: program_id,
            ..Self::default()
        }
    }

    pub fn from_room(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            program_instance_id: room.id.clone(),
            program_library_id: room.program_id,
            notes: room.notes.clone(),
            location: room.location.clone(),
            time_zone: room.time_zone.clone(),
            latitude: room.latitude.clone(),
            longitude: room.longitude.clone(),
            address_sets_location: room.address_sets_location,
            user_file: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCreatedResult {
    pub message: String,
    pub code: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgramInstanceResponse {
    #[serde(rename = "Device")]
    pub device: ProgramInstanceDevice,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgramInstanceDevice {
    #[serde(rename = "Programs")]
    pub programs: ProgramInstanceContext,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgramInstanceContext {
    #[serde(rename = "ProgramInstanceLibrary", default)]
    pub program_instance_library: ProgramInstanceLibrary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(id: i32, name: &str) -> ProgramEntry {
        ProgramEntry {
            program_id: id,
            program_name: name.to_string(),
            friendly_name: format!("{} friendly", name),
            ..ProgramEntry::default()
        }
    }

    fn instance(id: &str, library_id: i32) -> ProgramInstance {
        ProgramInstance {
            program_instance_id: id.to_string(),
            name: format!("{} name", id),
            program_library_id: library_id,
            status: RoomStatus::Running,
            ..ProgramInstance::default()
        }
    }

    fn library() -> ProgramLibrary {
        let mut library = ProgramLibrary::new();
        library.insert("1".into(), program(1, "alpha"));
        library.insert("2".into(), program(2, "beta"));
        library
    }

    #[test]
    fn test_join_sorts_by_room_id() {
        let mut instances = ProgramInstanceLibrary::new();
        instances.insert("a".into(), instance("ROOM3", 1));
        instances.insert("b".into(), instance("ROOM1", 2));
        instances.insert("c".into(), instance("ROOM2", 1));

        let rooms = join_rooms(instances, &library()).unwrap();
        let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["ROOM1", "ROOM2", "ROOM3"]);
        assert_eq!(rooms[0].program_name, "beta");
        assert_eq!(rooms[0].program_friendly, "beta friendly");
    }

    #[test]
    fn test_join_fails_on_unresolved_program() {
        let mut instances = ProgramInstanceLibrary::new();
        instances.insert("a".into(), instance("ROOM1", 1));
        instances.insert("b".into(), instance("ORPHAN", 42));

        match join_rooms(instances, &library()) {
            Err(VcliError::UnresolvedProgram { room, library_id }) => {
                assert_eq!(room, "ORPHAN");
                assert_eq!(library_id, "42");
            }
            other => panic!("Expected UnresolvedProgram, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let json = r#"{"ProgramInstanceId":"R1","Status":"Compiling","ProgramLibraryId":1}"#;
        let parsed: ProgramInstance = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, RoomStatus::Unknown("Compiling".into()));
        assert!(!parsed.status.is_active());
        assert_eq!(parsed.status.to_string(), "Compiling");
    }

    #[test]
    fn test_active_statuses() {
        assert!(RoomStatus::Running.is_active());
        assert!(RoomStatus::Starting.is_active());
        assert!(!RoomStatus::Stopping.is_active());
        assert!(!RoomStatus::Aborted.is_active());
    }
}
