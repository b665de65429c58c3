//! Mutation result envelope
//!
//! The appliance answers every mutation with
//! `{"Actions":[{"Results":[{"object":T,"StatusInfo":s,"StatusId":n}]}]}` and
//! signals logical failure through `StatusId` while still returning HTTP 200.
//! This is the only place that rule is applied.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{VcliError, VcliResult};

#[derive(Debug, Deserialize)]
struct ActionEnvelope {
    #[serde(rename = "Actions", default)]
    actions: Vec<Action>,
}

#[derive(Debug, Deserialize)]
struct Action {
    #[serde(rename = "Results", default)]
    results: Vec<ActionResult>,
}

#[derive(Debug, Deserialize)]
struct ActionResult {
    #[serde(rename = "object", default)]
    object: serde_json::Value,
    #[serde(rename = "StatusInfo", default)]
    status_info: String,
    #[serde(rename = "StatusId", default)]
    status_id: i64,
}

/// The first action result of a successful envelope.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub code: u16,
    pub operation: String,
    pub status_info: String,
    pub status_id: i64,
    object: serde_json::Value,
}

impl ActionOutcome {
    /// Decode the `object` payload.
    pub fn object<T: DeserializeOwned>(self) -> VcliResult<T> {
        serde_json::from_value(self.object)
            .map_err(|e| VcliError::decode(self.code, self.operation, e))
    }
}

/// Decode a body that must contain an envelope.
///
/// A missing action result is a decode failure and a non-zero `StatusId` is
/// an [`VcliError::Operation`] carrying the appliance's `StatusInfo`.
pub fn decode_envelope(code: u16, operation: &str, body: &[u8]) -> VcliResult<ActionOutcome> {
    let envelope: ActionEnvelope =
        serde_json::from_slice(body).map_err(|e| VcliError::decode(code, operation, e))?;

    let result = envelope
        .actions
        .into_iter()
        .next()
        .and_then(|action| action.results.into_iter().next())
        .ok_or_else(|| {
            VcliError::decode(
                code,
                operation,
                MissingResult,
            )
        })?;

    if result.status_id != 0 {
        return Err(VcliError::operation(
            operation,
            result.status_id,
            result.status_info,
        ));
    }

    Ok(ActionOutcome {
        code,
        operation: operation.to_string(),
        status_info: result.status_info,
        status_id: result.status_id,
        object: result.object,
    })
}

/// Like [`decode_envelope`] for endpoints that may answer with an empty or
/// non-envelope body; only an explicit non-zero `StatusId` fails.
pub fn check_envelope(code: u16, operation: &str, body: &[u8]) -> VcliResult<()> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(());
    }
    match decode_envelope(code, operation, body) {
        Ok(_) => Ok(()),
        Err(err @ VcliError::Operation { .. }) => Err(err),
        Err(_) => Ok(()),
    }
}

#[derive(Debug, thiserror::Error)]
#[error("envelope contains no action result")]
struct MissingResult;
