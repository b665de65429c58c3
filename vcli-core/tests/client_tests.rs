//! ApplianceClient against an in-process fake appliance

use axum::extract::{FromRequest, Multipart, Path, Request, State};
use axum::http::{header, StatusCode};
use axum::routing::{delete, get};
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use vcli_core::types::{ProgramOptions, RoomOptions, RoomStatus};
use vcli_core::{ApplianceApi, ApplianceClient, VcliConfig, VcliError};

#[derive(Clone)]
struct FakeState {
    calls: Arc<Mutex<Vec<String>>>,
    instances: Arc<Mutex<Value>>,
}

impl FakeState {
    fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            instances: Arc::new(Mutex::new(json!({
                "7": instance("ROOM3", 1, "Running"),
                "2": instance("ROOM1", 3, "Stopped"),
                "9": instance("ROOM2", 1, "Aborted"),
            }))),
        }
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn instance(id: &str, library_id: i32, status: &str) -> Value {
    json!({
        "id": 1,
        "ProgramInstanceId": id,
        "Name": format!("{} name", id),
        "Status": status,
        "ProgramLibraryId": library_id,
        "DebuggingEnabled": false
    })
}

fn envelope(object: Value, status_id: i64, info: &str) -> Json<Value> {
    Json(json!({
        "Actions": [{ "Results": [{ "object": object, "StatusInfo": info, "StatusId": status_id }] }]
    }))
}

async fn device_info(State(s): State<FakeState>) -> Json<Value> {
    s.record("GET DeviceInfo");
    Json(json!({
        "Device": { "DeviceInfo": {
            "Name": "vc4-lab",
            "MacAddress": "AA:BB:CC:00:11:22",
            "BuildDate": "2024-01-01",
            "Version": "4.0.1",
            "Model": "VC-4"
        }}
    }))
}

async fn program_library(State(s): State<FakeState>) -> Json<Value> {
    s.record("GET ProgramLibrary");
    Json(json!({
        "Device": { "Programs": { "ProgramLibrary": {
            "12": { "ProgramId": 12, "FriendlyName": "Boardroom", "ProgramName": "board" },
            "1": { "ProgramId": 1, "FriendlyName": "Lobby", "ProgramName": "lobby", "AppFile": "lobby.cpz" },
            "3": { "ProgramId": 3, "FriendlyName": "Gym", "ProgramName": "gym" }
        }}}
    }))
}

async fn upload_program(State(s): State<FakeState>, mut multipart: Multipart) -> Json<Value> {
    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        fields.push(field.name().unwrap_or_default().to_string());
    }
    s.record(format!("POST ProgramLibrary {}", fields.join(",")));
    envelope(json!({ "ProgramId": 21, "FriendlyName": "Uploaded" }), 0, "Program uploaded")
}

async fn edit_program(State(s): State<FakeState>, mut multipart: Multipart) -> Json<Value> {
    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        fields.push(field.name().unwrap_or_default().to_string());
    }
    s.record(format!("PUT ProgramLibrary {}", fields.join(",")));
    envelope(json!({ "ProgramId": 1, "FriendlyName": "Lobby" }), 0, "Program updated")
}

async fn delete_program(State(s): State<FakeState>, Path(id): Path<i32>) -> Json<Value> {
    s.record(format!("DELETE ProgramLibrary/{}", id));
    if id == 99 {
        envelope(Value::Null, 7, "Program is in use by a room")
    } else {
        envelope(Value::Null, 0, "Program deleted")
    }
}

async fn program_instances(State(s): State<FakeState>) -> Json<Value> {
    s.record("GET ProgramInstance");
    let instances = s.instances.lock().unwrap().clone();
    Json(json!({ "Device": { "Programs": { "ProgramInstanceLibrary": instances } } }))
}

/// Lifecycle flags arrive form-urlencoded, room edits as multipart.
async fn update_instance(State(s): State<FakeState>, request: Request) -> Json<Value> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"));

    if is_multipart {
        let mut multipart = Multipart::from_request(request, &s).await.unwrap();
        let mut fields = Vec::new();
        while let Ok(Some(field)) = multipart.next_field().await {
            let name = field.name().unwrap_or_default().to_string();
            let value = field.text().await.unwrap_or_default();
            fields.push(format!("{}={}", name, value));
        }
        s.record(format!("PUT ProgramInstance multipart {}", fields.join(",")));
        envelope(Value::Null, 0, "Room updated")
    } else {
        let body = String::from_request(request, &s).await.unwrap();
        s.record(format!("PUT ProgramInstance {}", body));
        envelope(Value::Null, 0, "OK")
    }
}

async fn create_room(State(s): State<FakeState>, mut multipart: Multipart) -> Json<Value> {
    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        fields.push(field.name().unwrap_or_default().to_string());
    }
    s.record(format!("POST ProgramInstance {}", fields.join(",")));
    envelope(Value::Null, 0, "Room created")
}

async fn delete_room(State(s): State<FakeState>, Path(id): Path<String>) -> Json<Value> {
    s.record(format!("DELETE ProgramInstance/{}", id));
    envelope(Value::Null, 0, "Room deleted")
}

async fn ip_table(State(s): State<FakeState>, Path(room): Path<String>) -> Json<Value> {
    s.record(format!("GET IpTableByPID/{}", room));
    Json(json!({ "Device": { "Programs": { "IpTableByPID": [
        { "ProgramIpId": 16, "Model": "TSW-1070", "Status": "ONLINE" },
        { "ProgramIpId": 3, "Model": "DM-NVX", "Status": "OFFLINE" },
        { "ProgramIpId": 10, "Model": "CP4", "Status": "ONLINE" }
    ]}}}))
}

async fn tokens(State(s): State<FakeState>) -> Json<Value> {
    s.record("GET Token");
    Json(json!({ "Device": { "Programs": { "TokenList": [
        { "Token": "0123456789abcdef", "Status": 1, "Description": "ci", "Level": "" }
    ]}}}))
}

async fn create_token(State(s): State<FakeState>, Json(request): Json<Value>) -> Json<Value> {
    s.record(format!("POST Token {}", request));
    envelope(
        json!({ "Token": "fresh-token-value", "Status": request["Status"], "Description": request["Description"] }),
        0,
        "OK",
    )
}

async fn edit_token(State(s): State<FakeState>, Json(request): Json<Value>) -> Json<Value> {
    s.record(format!(
        "PUT Token {} {} {}",
        request["Token"], request["Status"], request["Description"]
    ));
    envelope(
        json!({ "Token": request["Token"], "Status": request["Status"], "Description": request["Description"] }),
        0,
        "OK",
    )
}

async fn delete_token(State(s): State<FakeState>, Path(token): Path<String>) -> StatusCode {
    s.record(format!("DELETE Token/{}", token));
    if token == "0123456789abcdef" {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn spawn_appliance(state: FakeState) -> ApplianceClient {
    let app = Router::new()
        .route("/DeviceInfo", get(device_info))
        .route(
            "/ProgramLibrary",
            get(program_library).post(upload_program).put(edit_program),
        )
        .route("/ProgramLibrary/:id", delete(delete_program))
        .route(
            "/ProgramInstance",
            get(program_instances).put(update_instance).post(create_room),
        )
        .route("/ProgramInstance/:id", delete(delete_room))
        .route("/IpTableByPID/:room", get(ip_table))
        .route("/Token", get(tokens).post(create_token).put(edit_token))
        .route("/Token/:token", delete(delete_token))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ApplianceClient::new(&VcliConfig::test(format!("http://{}", addr))).unwrap()
}

fn temp_program(suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(b"compiled program").unwrap();
    file
}

#[tokio::test]
async fn test_device_info_decodes_nested_payload() {
    let client = spawn_appliance(FakeState::new()).await;

    let info = client.device_info().await.unwrap();
    assert_eq!(info.name, "vc4-lab");
    assert_eq!(info.mac_address, "AA:BB:CC:00:11:22");
    assert_eq!(info.build_date, "2024-01-01");
}

#[tokio::test]
async fn test_programs_are_sorted_by_id() {
    let client = spawn_appliance(FakeState::new()).await;

    let programs = client.programs().await.unwrap();
    let ids: Vec<i32> = programs.iter().map(|p| p.program_id).collect();
    assert_eq!(ids, vec![1, 3, 12]);
}

#[tokio::test]
async fn test_rooms_join_with_library_and_sort() {
    let client = spawn_appliance(FakeState::new()).await;

    let rooms = client.rooms().await.unwrap();
    let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["ROOM1", "ROOM2", "ROOM3"]);
    assert_eq!(rooms[0].program_friendly, "Gym");
    assert_eq!(rooms[1].status, RoomStatus::Aborted);
}

#[tokio::test]
async fn test_rooms_fail_when_program_is_missing() {
    let state = FakeState::new();
    state
        .instances
        .lock()
        .unwrap()
        .as_object_mut()
        .unwrap()
        .insert("44".into(), instance("ORPHAN", 77, "Running"));
    let client = spawn_appliance(state).await;

    match client.rooms().await {
        Err(VcliError::UnresolvedProgram { room, library_id }) => {
            assert_eq!(room, "ORPHAN");
            assert_eq!(library_id, "77");
        }
        other => panic!("Expected UnresolvedProgram, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_program_rejects_extension_before_network() {
    let state = FakeState::new();
    let client = spawn_appliance(state.clone()).await;
    let file = temp_program(".exe");

    let options = ProgramOptions::new(file.path().to_string_lossy(), "Lobby program");
    let err = client.create_program(&options).await.unwrap_err();

    assert!(matches!(err, VcliError::Validation { .. }));
    assert!(state.calls().is_empty());
}

#[tokio::test]
async fn test_create_program_uploads_multipart() {
    let state = FakeState::new();
    let client = spawn_appliance(state.clone()).await;
    let file = temp_program(".cpz");

    let mut options = ProgramOptions::new(file.path().to_string_lossy(), "Lobby program");
    options.notes = "first upload".into();
    let result = client.create_program(&options).await.unwrap();

    assert_eq!(result.program_id, 21);
    assert_eq!(result.result, "Program uploaded");
    assert_eq!(
        state.calls(),
        vec!["POST ProgramLibrary AppFile,filetype,FriendlyName,Notes".to_string()]
    );
}

#[tokio::test]
async fn test_edit_program_skips_stored_file_names() {
    let state = FakeState::new();
    let client = spawn_appliance(state.clone()).await;

    let mut options = ProgramOptions::new("lobby.cpz", "Lobby program");
    options.program_id = 1;
    options.start_now = true;
    client.edit_program(&options).await.unwrap();

    assert_eq!(
        state.calls(),
        vec!["PUT ProgramLibrary ProgramId,FriendlyName,Notes,StartNow".to_string()]
    );
}

#[tokio::test]
async fn test_status_id_failure_on_http_200() {
    let client = spawn_appliance(FakeState::new()).await;

    match client.delete_program(99).await {
        Err(VcliError::Operation { status_id, info, .. }) => {
            assert_eq!(status_id, 7);
            assert_eq!(info, "Program is in use by a room");
        }
        other => panic!("Expected Operation error, got {:?}", other),
    }

    let ok = client.delete_program(4).await.unwrap();
    assert_eq!(ok.result, "Program deleted");
}

#[tokio::test]
async fn test_ip_table_sorted_by_ip_id() {
    let client = spawn_appliance(FakeState::new()).await;

    let entries = client.ip_table("ROOM1").await.unwrap();
    let ids: Vec<i64> = entries.iter().map(|e| e.program_ip_id).collect();
    assert_eq!(ids, vec![3, 10, 16]);
}

#[tokio::test]
async fn test_restart_stops_then_starts() {
    let state = FakeState::new();
    let client = spawn_appliance(state.clone()).await;

    ApplianceApi::restart_room(&client, "ROOM1", Duration::from_millis(10))
        .await
        .unwrap();

    assert_eq!(
        state.calls(),
        vec![
            "PUT ProgramInstance ProgramInstanceId=ROOM1&Stop=true".to_string(),
            "PUT ProgramInstance ProgramInstanceId=ROOM1&Start=true".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_create_room_sends_optional_fields_only_when_set() {
    let state = FakeState::new();
    let client = spawn_appliance(state.clone()).await;

    let mut options = RoomOptions::new(3, "ROOM9", "Gym annex");
    options.location = "Building 2".into();
    let result = client.create_room(&options).await.unwrap();

    assert_eq!(result.message, "Room created");
    assert_eq!(
        state.calls(),
        vec![
            "POST ProgramInstance Name,ProgramInstanceId,ProgramLibraryId,Location,AddressSetsLocation"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn test_edit_room_puts_multipart_fields() {
    let state = FakeState::new();
    let client = spawn_appliance(state.clone()).await;

    let mut options = RoomOptions::new(1, "ROOM3", "Main hall");
    options.notes = "stage left".into();
    let result = client.edit_room(&options).await.unwrap();

    assert_eq!(result.message, "Room updated");
    assert_eq!(
        state.calls(),
        vec![
            "PUT ProgramInstance multipart Name=Main hall,ProgramInstanceId=ROOM3,ProgramLibraryId=1,Notes=stage left,AddressSetsLocation=false"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn test_debug_room_puts_form_flag() {
    let state = FakeState::new();
    let client = spawn_appliance(state.clone()).await;

    client.debug_room("ROOM2", true).await.unwrap();
    client.debug_room("ROOM2", false).await.unwrap();

    assert_eq!(
        state.calls(),
        vec![
            "PUT ProgramInstance ProgramInstanceId=ROOM2&DebuggingEnabled=true".to_string(),
            "PUT ProgramInstance ProgramInstanceId=ROOM2&DebuggingEnabled=false".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_delete_room_uses_delete_verb() {
    let state = FakeState::new();
    let client = spawn_appliance(state.clone()).await;

    client.delete_room("ROOM1").await.unwrap();

    assert_eq!(state.calls(), vec!["DELETE ProgramInstance/ROOM1".to_string()]);
}

#[tokio::test]
async fn test_edit_token_puts_json_with_token() {
    let state = FakeState::new();
    let client = spawn_appliance(state.clone()).await;

    let edited = client
        .edit_token(false, "deploy bot", "0123456789abcdef")
        .await
        .unwrap();

    assert_eq!(edited.token, "0123456789abcdef");
    assert_eq!(edited.description, "deploy bot");
    assert!(!edited.status.is_readonly());
    assert_eq!(
        state.calls(),
        vec![r#"PUT Token "0123456789abcdef" 2 "deploy bot""#.to_string()]
    );
}

#[tokio::test]
async fn test_token_lifecycle() {
    let state = FakeState::new();
    let client = spawn_appliance(state.clone()).await;

    let tokens = client.tokens().await.unwrap();
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].status.is_readonly());

    let created = client.create_token(true, "dashboard").await.unwrap();
    assert_eq!(created.token, "fresh-token-value");
    assert!(created.status.is_readonly());

    client.delete_token("0123456789abcdef").await.unwrap();
}

#[tokio::test]
async fn test_delete_unknown_token_returns_server_status() {
    let client = spawn_appliance(FakeState::new()).await;

    let err = client.delete_token("missing").await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert!(matches!(err, VcliError::Status { code: 404, .. }));
}

#[tokio::test]
async fn test_unreachable_appliance_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApplianceClient::new(&VcliConfig::test(format!("http://{}", addr))).unwrap();
    let err = client.device_info().await.unwrap_err();
    assert_eq!(err.status_code(), Some(500));
}
