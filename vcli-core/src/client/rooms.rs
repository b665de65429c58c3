//! Program instance ("room") endpoints

use reqwest::multipart::Form;
use reqwest::Method;
use tracing::info;

use super::envelope::{check_envelope, decode_envelope};
use super::programs::file_part;
use super::session::ApplianceClient;
use crate::error::VcliResult;
use crate::types::room::ProgramInstanceResponse;
use crate::types::{join_rooms, ProgramInstanceLibrary, Room, RoomCreatedResult, RoomOptions};
use crate::validation::is_local_path;

pub(crate) const PROGRAM_INSTANCE: &str = "ProgramInstance";

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn room_form(options: &RoomOptions) -> Form {
    let mut form = Form::new()
        .text("Name", options.name.clone())
        .text("ProgramInstanceId", options.program_instance_id.clone())
        .text("ProgramLibraryId", options.program_library_id.to_string());

    let optional = [
        ("Notes", &options.notes),
        ("Location", &options.location),
        ("TimeZone", &options.time_zone),
        ("Latitude", &options.latitude),
        ("Longitude", &options.longitude),
    ];
    for (field, value) in optional {
        if !value.is_empty() {
            form = form.text(field, value.clone());
        }
    }

    form.text(
        "AddressSetsLocation",
        bool_str(options.address_sets_location),
    )
}

impl ApplianceClient {
    /// Instances as served, keyed by the appliance's internal id.
    pub async fn program_instances(&self) -> VcliResult<ProgramInstanceLibrary> {
        let response: ProgramInstanceResponse =
            self.get_json("get program instances", PROGRAM_INSTANCE).await?;
        Ok(response.device.programs.program_instance_library)
    }

    /// Every room joined with its program, ordered by room id.
    pub async fn rooms(&self) -> VcliResult<Vec<Room>> {
        let instances = self.program_instances().await?;
        let library = self.program_library().await?;
        join_rooms(instances, &library)
    }

    /// PUT a single lifecycle flag for a room.
    pub(crate) async fn room_action(&self, id: &str, action: &str, state: bool) -> VcliResult<()> {
        let operation = format!("{} room {}", action.to_lowercase(), id);
        let request = self
            .request(Method::PUT, PROGRAM_INSTANCE)
            .form(&[("ProgramInstanceId", id), (action, bool_str(state))]);
        let body = self.send(&operation, request).await?;
        check_envelope(body.code, &operation, &body.bytes)?;

        info!(room = id, action, state, "room action accepted");
        Ok(())
    }

    pub async fn start_room(&self, id: &str) -> VcliResult<()> {
        self.room_action(id, "Start", true).await
    }

    pub async fn stop_room(&self, id: &str) -> VcliResult<()> {
        self.room_action(id, "Stop", true).await
    }

    pub async fn debug_room(&self, id: &str, enable: bool) -> VcliResult<()> {
        self.room_action(id, "DebuggingEnabled", enable).await
    }

    async fn submit_room(
        &self,
        method: Method,
        operation: &str,
        options: &RoomOptions,
    ) -> VcliResult<RoomCreatedResult> {
        let mut form = room_form(options);
        if is_local_path(&options.user_file) {
            form = form.part("UserFile", file_part(&options.user_file).await?);
        }

        let body = self
            .send(operation, self.request(method, PROGRAM_INSTANCE).multipart(form))
            .await?;
        let outcome = decode_envelope(body.code, operation, &body.bytes)?;

        info!(room = %options.program_instance_id, program_id = options.program_library_id, "{}", operation);
        Ok(RoomCreatedResult {
            message: outcome.status_info,
            code: outcome.status_id,
        })
    }

    pub async fn create_room(&self, options: &RoomOptions) -> VcliResult<RoomCreatedResult> {
        self.submit_room(Method::POST, "create room", options).await
    }

    pub async fn edit_room(&self, options: &RoomOptions) -> VcliResult<RoomCreatedResult> {
        self.submit_room(Method::PUT, "edit room", options).await
    }

    pub async fn delete_room(&self, id: &str) -> VcliResult<()> {
        let operation = "delete room";
        let path = format!("{}/{}", PROGRAM_INSTANCE, id);
        let body = self.send(operation, self.request(Method::DELETE, &path)).await?;
        decode_envelope(body.code, operation, &body.bytes)?;

        info!(room = id, "room deleted");
        Ok(())
    }
}

