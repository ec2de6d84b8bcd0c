use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "WORDRUN_LOG";

/// Keeps the background log writer alive; drop it last.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

fn log_dir() -> std::io::Result<PathBuf> {
    let dir = match ProjectDirs::from("", "", "wordrun") {
        Some(pd) => pd.data_local_dir().join("logs"),
        None => std::env::temp_dir().join("wordrun").join("logs"),
    };
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Routes tracing to a daily log file; the terminal belongs to the UI.
/// Returns `None` when no log directory is usable or a subscriber is
/// already installed.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = log_dir().ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "wordrun.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("wordrun=info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
