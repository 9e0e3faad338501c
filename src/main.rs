//! Entry point of the interactive message desk.

use std::path::PathBuf;
use std::process::ExitCode;

use message_desk::cli::{
    App,
    run,
};
use message_desk::config::{
    ConfigManager,
    LogConfig,
};
use tokio::io::{
    AsyncWriteExt,
    BufReader,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let workspace_root =
        std::env::args().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);

    let mut config_manager = ConfigManager::new();
    if let Err(error) = config_manager.load_settings(Some(workspace_root)) {
        let mut stderr = tokio::io::stderr();
        let _ = stderr.write_all(format!("{error}\n").as_bytes()).await;
        return ExitCode::FAILURE;
    }

    let _guard = init_tracing(&config_manager.get_settings().log);
    tracing::info!(document = %config_manager.document_path().display(), "Starting message desk");

    let mut app = App::open(config_manager);
    let stdin = BufReader::new(tokio::io::stdin());
    if let Err(error) = run(&mut app, stdin, tokio::io::stdout()).await {
        tracing::error!(error = %error, "Session aborted");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Installs the global subscriber. Stdout is reserved for the page.
///
/// The returned guard flushes the file writer on drop.
fn init_tracing(log: &LogConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    if let Some(directory) = &log.directory {
        let appender = tracing_appender::rolling::daily(directory, "message-desk.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).init();
        Some(guard)
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        None
    }
}
