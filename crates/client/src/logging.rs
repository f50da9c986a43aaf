//! Tracing setup for the client binary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber.
///
/// Logs go to `<cache>/satchel/logs/<session>/client.log` unless `to_stderr`
/// is set, since stdout belongs to the console. The returned guard flushes
/// the file writer on drop and must be held for the life of the program.
pub fn setup_logging(session_id: Option<&str>, to_stderr: bool) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if to_stderr {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to install tracing subscriber")?;
        return Ok(None);
    }

    let session_id = session_id
        .map(str::to_owned)
        .unwrap_or_else(generated_session_id);
    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(Some(guard))
}

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/satchel/logs`
/// - Linux: `~/.cache/satchel/logs` (or `$XDG_CACHE_HOME/satchel/logs`)
/// - Windows: `%LOCALAPPDATA%\satchel\logs`
/// - Fallback: `<tmp>/satchel/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "satchel")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("satchel"))
        .join("logs")
}

fn generated_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{}", timestamp)
}
