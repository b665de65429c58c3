use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::warn;

use vcli_core::types::{
    ApiToken, DeviceInfo, IpTableEntry, ProgramDeleteResult, ProgramEntry, ProgramUploadResult,
    Room, RoomCreatedResult,
};
use vcli_core::{VcliError, VcliResult};

use crate::cli::QuickOutcome;
use crate::tui::types::{RoomAction, ServiceAction};

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Events that drive the TUI application
///
/// Everything the state machine reacts to arrives as one of these: keys from
/// the input thread, timers and command outcomes from the command runner.
/// Timers and outcomes carry the epoch current when they were dispatched so
/// the app can drop the ones that belong to a screen it already left.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Poll timer for the active data screen
    Tick { epoch: u64 },
    /// Progress-bar timer for forms, quick actions and service control
    Progress { epoch: u64 },
    Response { epoch: u64, response: Response },
}

/// Outcome of a command, routed back into the event loop.
#[derive(Debug)]
pub enum Response {
    Device(VcliResult<DeviceInfo>),
    Programs(VcliResult<Vec<ProgramEntry>>),
    /// Program list fetched to populate the room form's selector
    RoomPrograms(VcliResult<Vec<ProgramEntry>>),
    Rooms(VcliResult<Vec<Room>>),
    IpTable(VcliResult<Vec<IpTableEntry>>),
    Tokens(VcliResult<Vec<ApiToken>>),
    RoomAction {
        room: String,
        action: RoomAction,
        result: VcliResult<()>,
    },
    ProgramSaved(VcliResult<ProgramUploadResult>),
    ProgramDeleted(VcliResult<ProgramDeleteResult>),
    RoomSaved(VcliResult<RoomCreatedResult>),
    RoomDeleted {
        room: String,
        result: VcliResult<()>,
    },
    TokenSaved(VcliResult<ApiToken>),
    TokenDeleted(VcliResult<()>),
    Service {
        action: ServiceAction,
        result: VcliResult<String>,
    },
    QuickAction(VcliResult<QuickOutcome>),
}

/// Event handler that owns the event channel and the terminal input thread
///
/// Key presses are read on a dedicated blocking thread and forwarded over
/// the same unbounded channel the command runner writes to, so the loop
/// processes exactly one event at a time. The input thread can be paused
/// while a foreground child process owns the terminal.
pub struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
    paused: Arc<AtomicBool>,
    stopped: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            sender,
            receiver,
            paused: Arc::new(AtomicBool::new(false)),
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start forwarding terminal input.
    pub fn spawn_input(&self) {
        let sender = self.sender.clone();
        let paused = Arc::clone(&self.paused);
        let stopped = Arc::clone(&self.stopped);

        thread::spawn(move || {
            while !stopped.load(Ordering::Relaxed) {
                if paused.load(Ordering::Relaxed) {
                    thread::sleep(INPUT_POLL);
                    continue;
                }

                let ready = match event::poll(INPUT_POLL) {
                    Ok(ready) => ready,
                    Err(e) => {
                        warn!(error = %e, "failed to poll terminal events");
                        break;
                    }
                };
                if !ready {
                    continue;
                }

                let forwarded = match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        sender.send(Event::Key(key))
                    }
                    Ok(CrosstermEvent::Resize(w, h)) => sender.send(Event::Resize(w, h)),
                    Ok(_) => Ok(()),
                    Err(e) => {
                        warn!(error = %e, "failed to read terminal event");
                        break;
                    }
                };
                if forwarded.is_err() {
                    break;
                }
            }
        });
    }

    /// Wait for the next event
    pub async fn next(&mut self) -> VcliResult<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_else(|| VcliError::internal("event channel closed"))
    }

    /// Get a sender for events produced outside the input thread
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    pub fn pause(&self) {
        self.paused.store(true, Ordering::Relaxed);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::Relaxed);
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stopped.store(true, Ordering::Relaxed);
    }
}
