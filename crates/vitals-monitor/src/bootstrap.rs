use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.vitals-monitor/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.vitals-monitor/`
/// - `~/.vitals-monitor/logs/`
/// - `~/.vitals-monitor/cache/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let monitor_dir = home.join(".vitals-monitor");
    std::fs::create_dir_all(&monitor_dir)?;
    std::fs::create_dir_all(monitor_dir.join("logs"))?;
    std::fs::create_dir_all(monitor_dir.join("cache"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// When `log_file` is given, log lines are appended to that file; otherwise
/// everything goes to stderr. Stderr logging while the TUI owns the terminal
/// would corrupt the alternate screen, so a file is the recommended target
/// for interactive runs.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let layer = fmt::layer()
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        None => {
            let layer = fmt::layer().with_target(false).with_thread_ids(false);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
