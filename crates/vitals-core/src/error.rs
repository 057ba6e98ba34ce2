use thiserror::Error;

/// All errors produced by the vitals monitor.
#[derive(Error, Debug)]
pub enum VitalsError {
    /// The engine rejected its credential or could not validate itself.
    /// Monitoring must not be entered; the user has to restart explicitly.
    #[error("Engine validation failed: {0}")]
    Validation(String),

    /// A lifecycle call was made while the engine was not running.
    #[error("Engine is not monitoring")]
    EngineNotRunning,

    /// A status-code string from the engine did not match any known code.
    #[error("Unknown status code: {0}")]
    UnknownStatusCode(String),

    /// An engine configuration value is missing or out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Pass-through for raw I/O errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the vitals crates.
pub type Result<T> = std::result::Result<T, VitalsError>;
