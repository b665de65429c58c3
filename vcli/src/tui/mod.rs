//! Terminal UI for the Virtual Control appliance
//!
//! The loop owns the terminal. Each turn it draws [`App`], waits for one
//! [`Event`], lets the app turn it into [`Command`]s and hands those to the
//! [`CommandRunner`]. Following the service journal is the one command run
//! here, since it needs the terminal for itself.

pub mod commands;
pub mod events;
pub mod forms;
mod keys;
pub mod state;
pub mod types;
pub mod ui;
pub mod views;

pub use commands::{Command, CommandRunner};
pub use events::{Event, EventHandler, Response};
pub use state::App;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use tokio::process::Command as ProcessCommand;
use tracing::{debug, info, warn};

use vcli_core::config::SERVICE_UNIT;
use vcli_core::{ApplianceApi, VcliConfig, VcliError, VcliResult};

use crate::cli::QuickAction;
use types::ServiceAction;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI until the user quits or the process is interrupted.
pub async fn run(
    config: VcliConfig,
    quick_action: Option<QuickAction>,
    api: Arc<dyn ApplianceApi>,
) -> VcliResult<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &config, quick_action, api).await;
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        warn!(error = %e, "TUI exited with error");
    }
    result
}

async fn run_app(
    terminal: &mut Tui,
    config: &VcliConfig,
    quick_action: Option<QuickAction>,
    api: Arc<dyn ApplianceApi>,
) -> VcliResult<()> {
    let mut app = App::new(config, quick_action);
    let mut events = EventHandler::new();
    let runner = CommandRunner::new(api, events.sender(), config.restart_delay);
    events.spawn_input();

    let startup = app.startup();
    let epoch = app.epoch();
    for command in startup {
        runner.dispatch(command, epoch);
    }

    let mut interrupt = Box::pin(tokio::signal::ctrl_c());

    while !app.should_quit() {
        terminal
            .draw(|f| ui::render(f, &app))
            .map_err(terminal_error)?;

        let event = tokio::select! {
            event = events.next() => event?,
            _ = &mut interrupt => {
                info!("interrupted, shutting down");
                break;
            }
        };

        let commands = app.handle_event(event);
        let epoch = app.epoch();
        for command in commands {
            if matches!(command, Command::OpenJournal) {
                follow_journal(terminal, &events, epoch).await?;
                // The journal is closed with ctrl+c; that signal was ours too
                interrupt = Box::pin(tokio::signal::ctrl_c());
            } else {
                runner.dispatch(command, epoch);
            }
        }
    }

    info!("TUI loop finished");
    Ok(())
}

/// Hand the terminal to `journalctl -f` until the user closes it.
async fn follow_journal(terminal: &mut Tui, events: &EventHandler, epoch: u64) -> VcliResult<()> {
    events.pause();
    restore_terminal(terminal)?;

    info!(unit = SERVICE_UNIT, "following service journal");
    let result = match ProcessCommand::new("journalctl")
        .args(["-u", SERVICE_UNIT, "-f"])
        .status()
        .await
    {
        Ok(status) => {
            debug!(%status, "journalctl exited");
            Ok(format!("closed the {} journal", SERVICE_UNIT))
        }
        Err(e) => {
            warn!(error = %e, "failed to run journalctl");
            Err(VcliError::service(
                format!("journalctl -u {} -f", SERVICE_UNIT),
                e.to_string(),
            ))
        }
    };

    enable_raw_mode().map_err(terminal_error)?;
    execute!(terminal.backend_mut(), EnterAlternateScreen).map_err(terminal_error)?;
    terminal.clear().map_err(terminal_error)?;
    events.resume();

    let response = Response::Service {
        action: ServiceAction::Logs,
        result,
    };
    if events.sender().send(Event::Response { epoch, response }).is_err() {
        debug!("event channel closed before journal result");
    }
    Ok(())
}

fn setup_terminal() -> VcliResult<Tui> {
    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(terminal_error)
}

fn restore_terminal(terminal: &mut Tui) -> VcliResult<()> {
    disable_raw_mode().map_err(terminal_error)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)
}

fn terminal_error(e: io::Error) -> VcliError {
    VcliError::terminal(e.to_string())
}
