//! Program library types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Library map as served by the appliance, keyed by the string form of
/// `ProgramId`.
pub type ProgramLibrary = HashMap<String, ProgramEntry>;

/// One uploaded program in the appliance's library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProgramEntry {
    #[serde(rename = "ProgramId")]
    pub program_id: i32,
    pub friendly_name: String,
    pub notes: String,
    pub app_file: String,
    #[serde(rename = "AppFileTS")]
    pub app_file_ts: String,
    pub mobility_file: String,
    #[serde(rename = "MobilityFileTS")]
    pub mobility_file_ts: String,
    pub webx_panel_file: String,
    #[serde(rename = "WebxPanelFileTS")]
    pub webx_panel_file_ts: String,
    pub project_file: String,
    #[serde(rename = "ProjectFileTS")]
    pub project_file_ts: String,
    pub cws_file: String,
    #[serde(rename = "CwsFileTS")]
    pub cws_file_ts: String,
    pub program_type: String,
    pub program_name: String,
    pub compile_date_time: String,
    #[serde(rename = "CresDBVersion")]
    pub cres_db_version: String,
    #[serde(rename = "DeviceDBVersion")]
    pub device_db_version: String,
    pub include_dat_version: String,
}

impl ProgramEntry {
    pub fn has_app_file(&self) -> bool {
        !self.app_file.is_empty()
    }
}

/// Flattens the id-keyed library into a list ordered by program id.
pub fn sorted_programs(library: ProgramLibrary) -> Vec<ProgramEntry> {
    let mut programs: Vec<ProgramEntry> = library.into_values().collect();
    programs.sort_by_key(|p| p.program_id);
    programs
}

/// File slots a program entry can carry, each with its accepted suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramFileKind {
    App,
    Mobility,
    Project,
    WebxPanel,
    Cws,
}

impl ProgramFileKind {
    pub const ALL: [ProgramFileKind; 5] = [
        ProgramFileKind::App,
        ProgramFileKind::Mobility,
        ProgramFileKind::Project,
        ProgramFileKind::WebxPanel,
        ProgramFileKind::Cws,
    ];

    /// Multipart field name
    pub fn field(self) -> &'static str {
        match self {
            ProgramFileKind::App => "AppFile",
            ProgramFileKind::Mobility => "MobilityFile",
            ProgramFileKind::Project => "ProjectFile",
            ProgramFileKind::WebxPanel => "WebxPanelFile",
            ProgramFileKind::Cws => "CwsFile",
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ProgramFileKind::App => &[".cpz", ".lpz", ".zip"],
            ProgramFileKind::Mobility => &[".zip", ".Core3z"],
            // "ch5z" carries no dot on the appliance side either
            ProgramFileKind::Project | ProgramFileKind::WebxPanel => {
                &[".zip", "ch5z", ".vtz", ".Core3z"]
            }
            ProgramFileKind::Cws => &[".zip"],
        }
    }
}

/// Input for creating or editing a library entry.
///
/// File values that are not local paths (no `/` or `\`) are treated as the
/// name already stored on the appliance and are not uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramOptions {
    pub program_id: i32,
    pub app_file: String,
    pub name: String,
    pub notes: String,
    pub mobility_file: String,
    pub webx_panel_file: String,
    pub project_file: String,
    pub cws_file: String,
    pub start_now: bool,
}

impl ProgramOptions {
    pub fn new(app_file: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            app_file: app_file.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Seed an edit from an existing entry.
    pub fn from_entry(entry: &ProgramEntry) -> Self {
        Self {
            program_id: entry.program_id,
            app_file: entry.app_file.clone(),
            name: entry.friendly_name.clone(),
            notes: entry.notes.clone(),
            mobility_file: entry.mobility_file.clone(),
            webx_panel_file: entry.webx_panel_file.clone(),
            project_file: entry.project_file.clone(),
            cws_file: entry.cws_file.clone(),
            start_now: false,
        }
    }

    pub fn file(&self, kind: ProgramFileKind) -> &str {
        match kind {
            ProgramFileKind::App => &self.app_file,
            ProgramFileKind::Mobility => &self.mobility_file,
            ProgramFileKind::Project => &self.project_file,
            ProgramFileKind::WebxPanel => &self.webx_panel_file,
            ProgramFileKind::Cws => &self.cws_file,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramUploadResult {
    pub program_id: i32,
    pub friendly_name: String,
    pub result: String,
    pub code: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramDeleteResult {
    pub result: String,
    pub code: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgramLibraryResponse {
    #[serde(rename = "Device")]
    pub device: ProgramLibraryDevice,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgramLibraryDevice {
    #[serde(rename = "Programs")]
    pub programs: ProgramLibraryContext,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgramLibraryContext {
    #[serde(rename = "ProgramLibrary", default)]
    pub program_library: ProgramLibrary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i32) -> ProgramEntry {
        ProgramEntry {
            program_id: id,
            friendly_name: format!("program-{}", id),
            ..ProgramEntry::default()
        }
    }

    #[test]
    fn test_sorted_programs_orders_by_id() {
        let mut library = ProgramLibrary::new();
        for id in [12, 3, 7, 1] {
            library.insert(id.to_string(), entry(id));
        }

        let ids: Vec<i32> = sorted_programs(library).iter().map(|p| p.program_id).collect();
        assert_eq!(ids, vec![1, 3, 7, 12]);
    }

    #[test]
    fn test_entry_decodes_wire_names() {
        let json = r#"{
            "ProgramId": 4,
            "FriendlyName": "Lobby",
            "AppFile": "lobby.cpz",
            "AppFileTS": "2024-01-01",
            "CresDBVersion": "200",
            "IncludeDatVersion": "1.0"
        }"#;
        let entry: ProgramEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.program_id, 4);
        assert_eq!(entry.app_file_ts, "2024-01-01");
        assert_eq!(entry.cres_db_version, "200");
        assert_eq!(entry.include_dat_version, "1.0");
        assert!(entry.has_app_file());
    }

    #[test]
    fn test_options_from_entry_keeps_stored_names() {
        let mut e = entry(9);
        e.app_file = "stored.cpz".into();
        let options = ProgramOptions::from_entry(&e);
        assert_eq!(options.program_id, 9);
        assert_eq!(options.file(ProgramFileKind::App), "stored.cpz");
        assert!(!options.start_now);
    }
}
