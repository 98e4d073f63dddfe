//! Tracing setup for test harnesses
//!
//! Libraries only emit events; the harness that owns the process calls
//! [`init_tracing`] once, typically from a test-suite setup hook.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Set up tracing with two layers:
/// - Console: controlled by RUST_LOG (default: warn)
/// - File: always debug-level JSON to ~/.tmbridge/logs/
///
/// A subscriber installed earlier is left in place. Keep the returned guard
/// alive for as long as file logging should be flushed.
pub fn init_tracing() -> Option<WorkerGuard> {
    init_tracing_in(log_directory().as_deref())
}

/// Same as [`init_tracing`], writing the log file into `log_dir`.
/// Without a directory only the console layer is installed.
pub fn init_tracing_in(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(log_dir) = log_dir {
        let file_appender = tracing_appender::rolling::daily(log_dir, "tmbridge.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let installed = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_filter(console_filter),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
            .try_init()
            .is_ok();

        return installed.then_some(guard);
    }

    // Fallback: console only
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_filter(console_filter),
        )
        .try_init();

    None
}

/// Returns the log directory path, creating it if needed.
fn log_directory() -> Option<PathBuf> {
    let log_dir = dirs::home_dir()?.join(".tmbridge").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    Some(log_dir)
}
