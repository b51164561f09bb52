use std::io;
use thiserror::Error;

/// Custom error type for the check_proliant plugin
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Acquisition failed: {0}")]
    Acquisition(String),

    #[error("Timed out after {0}s waiting for hpasmcli")]
    Timeout(u64),

    #[error("Malformed {subsystem} record: {line}")]
    MalformedRecord { subsystem: String, line: String },

    #[error("Unsupported subsystem: {0}")]
    UnsupportedSubsystem(String),
}

/// Result type alias for the plugin
pub type Result<T> = std::result::Result<T, CheckError>;

impl CheckError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CheckError::Config(msg.into())
    }

    /// Create an acquisition error
    pub fn acquisition<S: Into<String>>(msg: S) -> Self {
        CheckError::Acquisition(msg.into())
    }

    /// Create a malformed-record error
    pub fn malformed_record<S: Into<String>, L: Into<String>>(subsystem: S, line: L) -> Self {
        CheckError::MalformedRecord {
            subsystem: subsystem.into(),
            line: line.into(),
        }
    }
}
