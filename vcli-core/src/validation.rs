//! Client-side input validation
//!
//! Every check here runs before any request is built, so a rejected input
//! never reaches the appliance.

use crate::error::{VcliError, VcliResult};
use crate::types::ProgramFileKind;

/// Characters the appliance refuses in a room id.
pub const ROOM_ID_FORBIDDEN: &str = "!@#$%^&*()_+{}[]|\\<,>.?/";

pub const MIN_NAME_LEN: usize = 5;

/// A new program upload must be a compiled program archive.
pub fn validate_program_file(file: &str) -> VcliResult<()> {
    if has_extension(file, ProgramFileKind::App.extensions()) {
        Ok(())
    } else {
        Err(VcliError::validation(
            "AppFile",
            format!("invalid file extension {}", file),
        ))
    }
}

pub fn validate_name(name: &str) -> VcliResult<()> {
    if name.chars().count() < MIN_NAME_LEN {
        return Err(VcliError::validation(
            "Name",
            format!("name {} must have at least {} characters", name, MIN_NAME_LEN),
        ));
    }
    Ok(())
}

pub fn validate_room_id(id: &str) -> VcliResult<()> {
    if id.is_empty() {
        return Err(VcliError::validation("ProgramInstanceId", "room id is required"));
    }
    if id
        .chars()
        .any(|c| c.is_whitespace() || ROOM_ID_FORBIDDEN.contains(c))
    {
        return Err(VcliError::validation(
            "ProgramInstanceId",
            format!("room id cannot contain special characters or spaces {}", id),
        ));
    }
    Ok(())
}

/// The id of an existing room is immutable.
pub fn validate_edit_room_id(id: &str, original: &str) -> VcliResult<()> {
    if id != original {
        return Err(VcliError::validation(
            "ProgramInstanceId",
            format!("cannot edit the room id, value must be {}", original),
        ));
    }
    Ok(())
}

pub fn validate_token_description(description: &str) -> VcliResult<()> {
    if description.trim().is_empty() {
        return Err(VcliError::validation("Description", "description is required"));
    }
    Ok(())
}

/// True when the value names a local file rather than one already stored on
/// the appliance.
pub fn is_local_path(file: &str) -> bool {
    file.contains('/') || file.contains('\\')
}

pub fn has_extension(file: &str, extensions: &[&str]) -> bool {
    extensions.iter().any(|ext| file.ends_with(ext))
}

/// Validate an optional edit-time file slot.
///
/// Returns `Ok(true)` when the value is a local path that should be
/// uploaded, `Ok(false)` when it should be left alone.
pub fn validate_program_slot(kind: ProgramFileKind, file: &str) -> VcliResult<bool> {
    if !is_local_path(file) {
        return Ok(false);
    }
    if !has_extension(file, kind.extensions()) {
        return Err(VcliError::validation(
            kind.field(),
            format!("file {} has invalid extension", file),
        ));
    }
    Ok(true)
}
