//! Command-line flags and the quick actions they can trigger

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use vcli_core::types::{ProgramOptions, RoomOptions};
use vcli_core::{ApplianceApi, Endpoint, VcliConfig, VcliError, VcliResult};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "vcli")]
#[command(about = "Terminal UI for a Virtual Control appliance", long_about = None)]
#[command(version)]
pub struct Args {
    /// Hostname or IP of a remote appliance (requires --token)
    #[arg(short = 'H', long, env = "VCLI_HOST")]
    pub host: Option<String>,

    /// API token generated on the appliance web page
    #[arg(short, long, env = "VCLI_TOKEN")]
    pub token: Option<String>,

    /// Program file to upload
    #[arg(short, long)]
    pub file: Option<String>,

    /// Friendly name for the uploaded program
    #[arg(short, long)]
    pub name: Option<String>,

    /// Room id to create from the uploaded program
    #[arg(short, long)]
    pub room: Option<String>,

    /// Replace the program whose name matches instead of uploading a new one
    #[arg(short = 'o', long = "override")]
    pub override_program: bool,

    /// File the log is written to
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directives, e.g. "vcli=debug"
    #[arg(long, env = "VCLI_LOG")]
    pub log_level: Option<String>,
}

impl Args {
    /// Apply the flags on top of an environment-derived configuration.
    pub fn apply(&self, config: &mut VcliConfig) -> VcliResult<()> {
        if self.host.is_some() || self.token.is_some() {
            config.endpoint = Endpoint::from_parts(self.host.clone(), self.token.clone());
        }
        config.validate()
    }

    /// The quick action requested by the flags, if any.
    pub fn quick_action(&self) -> VcliResult<Option<QuickAction>> {
        let present = |v: &Option<String>| v.as_deref().map_or(false, |s| !s.is_empty());

        match (present(&self.file), present(&self.name), present(&self.room)) {
            (false, false, false) if !self.override_program => Ok(None),
            (true, true, true) => Ok(Some(QuickAction::UploadAndCreateRoom {
                file: self.file.clone().unwrap_or_default(),
                name: self.name.clone().unwrap_or_default(),
                room: self.room.clone().unwrap_or_default(),
            })),
            (true, true, false) => Ok(Some(QuickAction::Upload {
                file: self.file.clone().unwrap_or_default(),
                name: self.name.clone().unwrap_or_default(),
                override_existing: self.override_program,
            })),
            _ => Err(VcliError::configuration(
                "flags",
                "valid combinations are --file --name or --file --name --room",
            )),
        }
    }
}

/// One-shot action run from the command line before the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickAction {
    Upload {
        file: String,
        name: String,
        override_existing: bool,
    },
    UploadAndCreateRoom {
        file: String,
        name: String,
        room: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickOutcome {
    pub message: String,
    pub code: i64,
}

impl QuickAction {
    pub fn message(&self) -> String {
        match self {
            QuickAction::Upload {
                file,
                override_existing: true,
                ..
            } => format!("Replacing program with {}", file),
            QuickAction::Upload { file, .. } => format!("Loading new program {}", file),
            QuickAction::UploadAndCreateRoom { room, .. } => {
                format!("Uploading and creating new room {}", room)
            }
        }
    }

    pub async fn execute(&self, api: &dyn ApplianceApi) -> VcliResult<QuickOutcome> {
        match self {
            QuickAction::Upload {
                file,
                name,
                override_existing: false,
            } => {
                let result = api.create_program(&ProgramOptions::new(file, name)).await?;
                Ok(QuickOutcome {
                    message: result.friendly_name,
                    code: result.code,
                })
            }
            QuickAction::Upload {
                file,
                name,
                override_existing: true,
            } => {
                let programs = api.programs().await?;
                let existing = programs
                    .iter()
                    .find(|p| !p.friendly_name.is_empty() && name.ends_with(&p.friendly_name))
                    .ok_or_else(|| {
                        VcliError::validation("name", format!("no program matches {}", name))
                    })?;

                let mut options = ProgramOptions::from_entry(existing);
                options.app_file = file.clone();
                options.name = name.clone();
                options.start_now = true;

                info!(program_id = existing.program_id, "overriding program");
                let result = api.edit_program(&options).await?;
                Ok(QuickOutcome {
                    message: result.friendly_name,
                    code: result.code,
                })
            }
            QuickAction::UploadAndCreateRoom { file, name, room } => {
                let program = api.create_program(&ProgramOptions::new(file, name)).await?;
                let options = RoomOptions::new(program.program_id, room, room);
                let created = api.create_room(&options).await?;
                Ok(QuickOutcome {
                    message: created.message,
                    code: created.code,
                })
            }
        }
    }
}
