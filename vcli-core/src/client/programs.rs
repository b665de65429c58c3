//! Program library endpoints

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use std::path::Path;
use tracing::info;

use super::envelope::decode_envelope;
use super::session::ApplianceClient;
use crate::error::VcliResult;
use crate::types::program::ProgramLibraryResponse;
use crate::types::{
    sorted_programs, ProgramDeleteResult, ProgramEntry, ProgramFileKind, ProgramLibrary,
    ProgramOptions, ProgramUploadResult,
};
use crate::validation::{validate_program_file, validate_program_slot};

pub(crate) const PROGRAM_LIBRARY: &str = "ProgramLibrary";

/// Build a multipart file part from a local path.
pub(crate) async fn file_part(path: &str) -> VcliResult<Part> {
    let contents = tokio::fs::read(path).await?;
    let file_name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    Ok(Part::bytes(contents).file_name(file_name))
}

fn upload_result(outcome: super::envelope::ActionOutcome) -> VcliResult<ProgramUploadResult> {
    let result = outcome.status_info.clone();
    let code = outcome.status_id;
    let entry: ProgramEntry = outcome.object()?;
    Ok(ProgramUploadResult {
        program_id: entry.program_id,
        friendly_name: entry.friendly_name,
        result,
        code,
    })
}

impl ApplianceClient {
    /// The library as served: a map keyed by the string form of each id.
    pub async fn program_library(&self) -> VcliResult<ProgramLibrary> {
        let response: ProgramLibraryResponse =
            self.get_json("get program library", PROGRAM_LIBRARY).await?;
        Ok(response.device.programs.program_library)
    }

    /// All library entries ordered by program id.
    pub async fn programs(&self) -> VcliResult<Vec<ProgramEntry>> {
        Ok(sorted_programs(self.program_library().await?))
    }

    /// Upload a new program file.
    pub async fn create_program(&self, options: &ProgramOptions) -> VcliResult<ProgramUploadResult> {
        validate_program_file(&options.app_file)?;

        let form = Form::new()
            .part("AppFile", file_part(&options.app_file).await?)
            .text("filetype", "AppFile")
            .text("FriendlyName", options.name.clone())
            .text("Notes", options.notes.clone());

        let operation = "upload new program";
        let body = self
            .send(operation, self.request(Method::POST, PROGRAM_LIBRARY).multipart(form))
            .await?;
        let result = upload_result(decode_envelope(body.code, operation, &body.bytes)?)?;

        info!(program_id = result.program_id, name = %result.friendly_name, "program uploaded");
        Ok(result)
    }

    /// Update an existing entry, uploading only the slots that hold local paths.
    pub async fn edit_program(&self, options: &ProgramOptions) -> VcliResult<ProgramUploadResult> {
        let mut uploads = Vec::new();
        for kind in ProgramFileKind::ALL {
            let file = options.file(kind);
            if validate_program_slot(kind, file)? {
                uploads.push((kind, file));
            }
        }

        let mut form = Form::new();
        for (kind, file) in uploads {
            form = form.part(kind.field(), file_part(file).await?);
        }
        form = form
            .text("ProgramId", options.program_id.to_string())
            .text("FriendlyName", options.name.clone())
            .text("Notes", options.notes.clone());
        if options.start_now {
            form = form.text("StartNow", "true");
        }

        let operation = "edit program";
        let body = self
            .send(operation, self.request(Method::PUT, PROGRAM_LIBRARY).multipart(form))
            .await?;
        let result = upload_result(decode_envelope(body.code, operation, &body.bytes)?)?;

        info!(program_id = result.program_id, start_now = options.start_now, "program updated");
        Ok(result)
    }

    pub async fn delete_program(&self, id: i32) -> VcliResult<ProgramDeleteResult> {
        let operation = "delete program";
        let path = format!("{}/{}", PROGRAM_LIBRARY, id);
        let body = self
            .send(operation, self.request(Method::DELETE, &path))
            .await?;
        let outcome = decode_envelope(body.code, operation, &body.bytes)?;

        info!(program_id = id, "program deleted");
        Ok(ProgramDeleteResult {
            result: outcome.status_info,
            code: outcome.status_id,
        })
    }
}
