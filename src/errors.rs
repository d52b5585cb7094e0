use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in SetEnv.
#[derive(Debug, Error)]
pub enum SetEnvError {
    // --- State file errors ---
    #[error("Failed to parse state file {path}: {reason}")]
    StateParse { path: PathBuf, reason: String },

    #[error(
        "Unknown {field} '{value}' in {path}: allowed options are: {allowed}. \
         Rerun with -{flag}=<value> to replace it"
    )]
    StoredOption {
        path: PathBuf,
        field: &'static str,
        flag: &'static str,
        value: String,
        allowed: String,
    },

    // --- Validation errors ---
    #[error("Invalid {option} '{value}': allowed options are: {allowed}")]
    InvalidOption {
        option: &'static str,
        value: String,
        allowed: String,
    },

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Convenience type alias for SetEnv results.
pub type Result<T> = std::result::Result<T, SetEnvError>;
