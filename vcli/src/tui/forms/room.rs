//! Room (program instance) forms

use crossterm::event::KeyEvent;

use super::{checkbox, edit_flag, edit_text, Form, Submission};
use vcli_core::types::{ProgramEntry, Room, RoomOptions};
use vcli_core::validation::{validate_edit_room_id, validate_name, validate_room_id};
use vcli_core::{VcliError, VcliResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomField {
    Program,
    Name,
    RoomId,
    Notes,
    Location,
    AddressSetsLocation,
    TimeZone,
    Latitude,
    Longitude,
    UserFile,
}

const NEW_FIELDS: [RoomField; 10] = [
    RoomField::Program,
    RoomField::Name,
    RoomField::RoomId,
    RoomField::Notes,
    RoomField::Location,
    RoomField::AddressSetsLocation,
    RoomField::TimeZone,
    RoomField::Latitude,
    RoomField::Longitude,
    RoomField::UserFile,
];

// The program of an existing room cannot be changed.
const EDIT_FIELDS: [RoomField; 9] = [
    RoomField::Name,
    RoomField::RoomId,
    RoomField::Notes,
    RoomField::Location,
    RoomField::AddressSetsLocation,
    RoomField::TimeZone,
    RoomField::Latitude,
    RoomField::Longitude,
    RoomField::UserFile,
];

impl RoomField {
    pub fn label(self) -> &'static str {
        match self {
            RoomField::Program => "Program",
            RoomField::Name => "Friendly name",
            RoomField::RoomId => "Room ID",
            RoomField::Notes => "Notes",
            RoomField::Location => "Location",
            RoomField::AddressSetsLocation => "Address sets location",
            RoomField::TimeZone => "Time zone",
            RoomField::Latitude => "Latitude",
            RoomField::Longitude => "Longitude",
            RoomField::UserFile => "User file",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            RoomField::Program => "ProgramLibraryId",
            RoomField::Name => "Name",
            RoomField::RoomId => "ProgramInstanceId",
            RoomField::Notes => "Notes",
            RoomField::Location => "Location",
            RoomField::AddressSetsLocation => "AddressSetsLocation",
            RoomField::TimeZone => "TimeZone",
            RoomField::Latitude => "Latitude",
            RoomField::Longitude => "Longitude",
            RoomField::UserFile => "UserFile",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            RoomField::Name => "My friendly room name",
            RoomField::RoomId => "ROOM404",
            RoomField::TimeZone => "America/New_York",
            RoomField::UserFile => "/home/user/settings.json",
            _ => "",
        }
    }
}

/// Create or edit a room.
///
/// New rooms pick their program from `programs`, which arrives
/// asynchronously after the form opens.
#[derive(Debug)]
pub struct RoomForm {
    pub options: RoomOptions,
    pub current_field: RoomField,
    pub submission: Submission,
    pub programs: Vec<ProgramEntry>,
    pub program_index: usize,
    pub programs_error: Option<VcliError>,
    original_id: Option<String>,
    seed: RoomOptions,
}

impl RoomForm {
    pub fn new() -> Self {
        Self::with_seed(RoomOptions::default(), None)
    }

    /// New room on a known program, e.g. the one selected in the library.
    pub fn for_program(program: &ProgramEntry) -> Self {
        let mut form = Self::with_seed(
            RoomOptions {
                program_library_id: program.program_id,
                ..RoomOptions::default()
            },
            None,
        );
        form.programs = vec![program.clone()];
        form
    }

    pub fn edit(room: &Room) -> Self {
        Self::with_seed(RoomOptions::from_room(room), Some(room.id.clone()))
    }

    fn with_seed(seed: RoomOptions, original_id: Option<String>) -> Self {
        let editing = original_id.is_some();
        Self {
            options: seed.clone(),
            current_field: if editing {
                RoomField::Name
            } else {
                RoomField::Program
            },
            submission: Submission::default(),
            programs: Vec::new(),
            program_index: 0,
            programs_error: None,
            original_id,
            seed,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.original_id.is_some()
    }

    pub fn original_id(&self) -> Option<&str> {
        self.original_id.as_deref()
    }

    pub fn fields(&self) -> &'static [RoomField] {
        if self.is_editing() {
            &EDIT_FIELDS
        } else {
            &NEW_FIELDS
        }
    }

    /// Populate the program selector, keeping a preselected program if it
    /// is still in the library.
    pub fn set_programs(&mut self, programs: Vec<ProgramEntry>) {
        let wanted = self.options.program_library_id;
        self.program_index = programs
            .iter()
            .position(|p| p.program_id == wanted)
            .unwrap_or(0);
        self.programs = programs;
        self.programs_error = None;
        self.sync_program();
    }

    pub fn selected_program(&self) -> Option<&ProgramEntry> {
        self.programs.get(self.program_index)
    }

    fn sync_program(&mut self) {
        if let Some(id) = self.selected_program().map(|p| p.program_id) {
            self.options.program_library_id = id;
        }
    }

    pub fn value(&self, field: RoomField) -> String {
        match field {
            RoomField::Program => match self.selected_program() {
                Some(p) => format!("< {} ({}) >", p.friendly_name, p.program_id),
                None if self.programs_error.is_some() => "failed to load programs".to_string(),
                None => "loading programs...".to_string(),
            },
            RoomField::AddressSetsLocation => checkbox(self.options.address_sets_location),
            other => self.text(other).map(str::to_string).unwrap_or_default(),
        }
    }

    fn text(&self, field: RoomField) -> Option<&str> {
        let o = &self.options;
        match field {
            RoomField::Name => Some(&o.name),
            RoomField::RoomId => Some(&o.program_instance_id),
            RoomField::Notes => Some(&o.notes),
            RoomField::Location => Some(&o.location),
            RoomField::TimeZone => Some(&o.time_zone),
            RoomField::Latitude => Some(&o.latitude),
            RoomField::Longitude => Some(&o.longitude),
            RoomField::UserFile => Some(&o.user_file),
            RoomField::Program | RoomField::AddressSetsLocation => None,
        }
    }

    fn text_mut(&mut self, field: RoomField) -> Option<&mut String> {
        let o = &mut self.options;
        match field {
            RoomField::Name => Some(&mut o.name),
            RoomField::RoomId => Some(&mut o.program_instance_id),
            RoomField::Notes => Some(&mut o.notes),
            RoomField::Location => Some(&mut o.location),
            RoomField::TimeZone => Some(&mut o.time_zone),
            RoomField::Latitude => Some(&mut o.latitude),
            RoomField::Longitude => Some(&mut o.longitude),
            RoomField::UserFile => Some(&mut o.user_file),
            RoomField::Program | RoomField::AddressSetsLocation => None,
        }
    }
}

impl Default for RoomForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RoomForm {
    type Output = RoomOptions;

    fn field_count(&self) -> usize {
        self.fields().len()
    }

    fn focus(&self) -> usize {
        self.fields()
            .iter()
            .position(|f| *f == self.current_field)
            .unwrap_or(0)
    }

    fn set_focus(&mut self, index: usize) {
        if let Some(field) = self.fields().get(index) {
            self.current_field = *field;
        }
    }

    fn edit(&mut self, key: KeyEvent) -> bool {
        match self.current_field {
            RoomField::Program => false,
            RoomField::AddressSetsLocation => {
                edit_flag(&mut self.options.address_sets_location, key)
            }
            field => match self.text_mut(field) {
                Some(value) => edit_text(value, key),
                None => false,
            },
        }
    }

    fn cycle(&mut self, forward: bool) {
        if self.current_field != RoomField::Program || self.programs.is_empty() {
            return;
        }
        let count = self.programs.len();
        self.program_index = if forward {
            (self.program_index + 1) % count
        } else {
            (self.program_index + count - 1) % count
        };
        self.sync_program();
    }

    fn reset(&mut self) {
        self.options = self.seed.clone();
        self.current_field = self.fields()[0];
        self.submission = Submission::default();
        let programs = std::mem::take(&mut self.programs);
        self.set_programs(programs);
    }

    fn submission(&self) -> &Submission {
        &self.submission
    }

    fn submission_mut(&mut self) -> &mut Submission {
        &mut self.submission
    }

    fn validate(&self) -> VcliResult<RoomOptions> {
        if !self.is_editing() && self.selected_program().is_none() {
            return Err(VcliError::validation(
                RoomField::Program.key(),
                "select a program for the room",
            ));
        }
        validate_name(&self.options.name)?;
        match &self.original_id {
            Some(original) => validate_edit_room_id(&self.options.program_instance_id, original)?,
            None => validate_room_id(&self.options.program_instance_id)?,
        }
        Ok(self.options.clone())
    }
}
