use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use vcli::cli::Args;
use vcli_core::config::{DEFAULT_LOG_DIRECTIVES, DEFAULT_LOG_FILE};
use vcli_core::{ApplianceApi, ApplianceClient, VcliConfig, VcliError, VcliResult};

#[tokio::main]
async fn main() -> VcliResult<()> {
    let args = Args::parse();

    // Bad flag combinations fail before the terminal is taken over
    let quick_action = args.quick_action()?;

    let mut config = VcliConfig::from_env()?;
    args.apply(&mut config)?;

    let _guard = init_logging(&args)?;
    info!(
        remote = config.endpoint.is_remote(),
        quick_action = quick_action.is_some(),
        "starting vcli"
    );

    let api: Arc<dyn ApplianceApi> = Arc::new(ApplianceClient::new(&config)?);
    vcli::tui::run(config, quick_action, api).await
}

/// Log to a file; the terminal belongs to the TUI.
fn init_logging(args: &Args) -> VcliResult<WorkerGuard> {
    let path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE));
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| VcliError::configuration("log_file", "must name a file"))?;

    let directives = args.log_level.as_deref().unwrap_or(DEFAULT_LOG_DIRECTIVES);
    let filter = EnvFilter::try_new(directives).map_err(|e| {
        VcliError::configuration("log_level", format!("Invalid log directive: {}", e))
    })?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
