//! Program library forms

use crossterm::event::KeyEvent;

use super::{checkbox, edit_flag, edit_text, Form, Submission};
use vcli_core::types::{ProgramEntry, ProgramFileKind, ProgramOptions};
use vcli_core::validation::{validate_name, validate_program_file, validate_program_slot};
use vcli_core::VcliResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramField {
    AppFile,
    FriendlyName,
    Notes,
    MobilityFile,
    WebxPanelFile,
    ProjectFile,
    CwsFile,
    StartNow,
}

const NEW_FIELDS: [ProgramField; 3] = [
    ProgramField::AppFile,
    ProgramField::FriendlyName,
    ProgramField::Notes,
];

const EDIT_FIELDS: [ProgramField; 8] = [
    ProgramField::AppFile,
    ProgramField::FriendlyName,
    ProgramField::Notes,
    ProgramField::MobilityFile,
    ProgramField::WebxPanelFile,
    ProgramField::ProjectFile,
    ProgramField::CwsFile,
    ProgramField::StartNow,
];

impl ProgramField {
    pub fn label(self) -> &'static str {
        match self {
            ProgramField::AppFile => "Program file",
            ProgramField::FriendlyName => "Friendly name",
            ProgramField::Notes => "Notes",
            ProgramField::MobilityFile => "Mobility project",
            ProgramField::WebxPanelFile => "XPanel",
            ProgramField::ProjectFile => "Touch panel project",
            ProgramField::CwsFile => "Configuration webpage",
            ProgramField::StartNow => "Start now",
        }
    }

    /// Name validation errors report this field under.
    pub fn key(self) -> &'static str {
        match self {
            ProgramField::AppFile => ProgramFileKind::App.field(),
            ProgramField::FriendlyName => "Name",
            ProgramField::Notes => "Notes",
            ProgramField::MobilityFile => ProgramFileKind::Mobility.field(),
            ProgramField::WebxPanelFile => ProgramFileKind::WebxPanel.field(),
            ProgramField::ProjectFile => ProgramFileKind::Project.field(),
            ProgramField::CwsFile => ProgramFileKind::Cws.field(),
            ProgramField::StartNow => "StartNow",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ProgramField::AppFile => "/home/user/my_program.cpz",
            ProgramField::FriendlyName => "My friendly program name",
            ProgramField::Notes => "",
            ProgramField::MobilityFile => "/home/user/mobile.Core3z",
            ProgramField::WebxPanelFile => "/home/user/xpanel.ch5z",
            ProgramField::ProjectFile => "/home/user/panel.vtz",
            ProgramField::CwsFile => "/home/user/dist.zip",
            ProgramField::StartNow => "",
        }
    }
}

/// Create or edit a program library entry.
#[derive(Debug)]
pub struct ProgramForm {
    pub options: ProgramOptions,
    pub current_field: ProgramField,
    pub submission: Submission,
    editing: bool,
    seed: ProgramOptions,
}

impl ProgramForm {
    pub fn new() -> Self {
        Self {
            options: ProgramOptions::default(),
            current_field: ProgramField::AppFile,
            submission: Submission::default(),
            editing: false,
            seed: ProgramOptions::default(),
        }
    }

    pub fn edit(entry: &ProgramEntry) -> Self {
        let seed = ProgramOptions::from_entry(entry);
        Self {
            options: seed.clone(),
            current_field: ProgramField::AppFile,
            submission: Submission::default(),
            editing: true,
            seed,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn fields(&self) -> &'static [ProgramField] {
        if self.editing {
            &EDIT_FIELDS
        } else {
            &NEW_FIELDS
        }
    }

    pub fn value(&self, field: ProgramField) -> String {
        match field {
            ProgramField::StartNow => checkbox(self.options.start_now),
            other => self.text(other).map(str::to_string).unwrap_or_default(),
        }
    }

    fn text(&self, field: ProgramField) -> Option<&str> {
        let o = &self.options;
        match field {
            ProgramField::AppFile => Some(&o.app_file),
            ProgramField::FriendlyName => Some(&o.name),
            ProgramField::Notes => Some(&o.notes),
            ProgramField::MobilityFile => Some(&o.mobility_file),
            ProgramField::WebxPanelFile => Some(&o.webx_panel_file),
            ProgramField::ProjectFile => Some(&o.project_file),
            ProgramField::CwsFile => Some(&o.cws_file),
            ProgramField::StartNow => None,
        }
    }

    fn text_mut(&mut self, field: ProgramField) -> Option<&mut String> {
        let o = &mut self.options;
        match field {
            ProgramField::AppFile => Some(&mut o.app_file),
            ProgramField::FriendlyName => Some(&mut o.name),
            ProgramField::Notes => Some(&mut o.notes),
            ProgramField::MobilityFile => Some(&mut o.mobility_file),
            ProgramField::WebxPanelFile => Some(&mut o.webx_panel_file),
            ProgramField::ProjectFile => Some(&mut o.project_file),
            ProgramField::CwsFile => Some(&mut o.cws_file),
            ProgramField::StartNow => None,
        }
    }
}

impl Default for ProgramForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ProgramForm {
    type Output = ProgramOptions;

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
        let field = self.current_field;
        match self.text_mut(field) {
            Some(value) => edit_text(value, key),
            None => edit_flag(&mut self.options.start_now, key),
        }
    }

    fn reset(&mut self) {
        self.options = self.seed.clone();
        self.current_field = ProgramField::AppFile;
        self.submission = Submission::default();
    }

    fn submission(&self) -> &Submission {
        &self.submission
    }

    fn submission_mut(&mut self) -> &mut Submission {
        &mut self.submission
    }

    fn validate(&self) -> VcliResult<ProgramOptions> {
        validate_program_file(&self.options.app_file)?;
        validate_name(&self.options.name)?;
        if self.editing {
            for kind in ProgramFileKind::ALL.iter().skip(1) {
                validate_program_slot(*kind, self.options.file(*kind))?;
            }
        }
        Ok(self.options.clone())
    }
}
