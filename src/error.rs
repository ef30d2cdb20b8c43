//! Error types for the pace calculator.
//!
//! The calculator itself never fails: numeric input degrades to zero and a
//! non-positive distance resets the derived output. Errors only exist at the
//! outer surfaces, where edits and configuration enter the system.
//!
//! ## Error Categories
//!
//! - **File Errors**: Edit scripts or config files that cannot be read
//! - **Parse Errors**: YAML that does not describe a script or config
//! - **Command Errors**: A selector word that names no mode, preset or unit
//! - **Config Errors**: A config that parses but describes an impossible state
//! - **Session Errors**: Edits sent after the driver has stopped
//!
//! ## Recovery
//!
//! ```rust
//! use pacer::CalculatorError;
//!
//! let error = CalculatorError::invalid_command("unit parsecs", "unknown unit 'parsecs'");
//! if error.is_retryable() {
//!     for suggestion in error.recovery_suggestions() {
//!         println!("  - {}", suggestion);
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for calculator operations.
pub type Result<T, E = CalculatorError> = std::result::Result<T, E>;

/// Main error type for calculator operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CalculatorError {
    #[error("Cannot read {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("Invalid command '{input}': {reason}")]
    InvalidCommand { input: String, reason: String },

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Calculator session has stopped")]
    SessionClosed,
}

impl CalculatorError {
    /// Returns whether the operation can be retried with different input.
    pub fn is_retryable(&self) -> bool {
        match self {
            CalculatorError::InvalidCommand { .. } => true,
            CalculatorError::File { .. } => false,
            CalculatorError::Parse { .. } => false,
            CalculatorError::Config { .. } => false,
            CalculatorError::SessionClosed => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            CalculatorError::File { .. } => vec![
                "Check the file exists and is readable",
                "Pass an absolute path if running from another directory",
            ],
            CalculatorError::Parse { .. } => vec![
                "Check the YAML indentation and field names",
                "Compare against the files under test-data/",
            ],
            CalculatorError::InvalidCommand { .. } => vec![
                "Type 'help' to list the available fields",
                "Presets are: 5k, 10k, half, marathon",
                "Units are: km, miles",
            ],
            CalculatorError::Config { .. } => vec![
                "Give either a preset or a custom distance, not both",
                "Remove the offending key to fall back to its default",
            ],
            CalculatorError::SessionClosed => vec![
                "Open a new session before sending more edits",
            ],
        }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        CalculatorError::File { path, source }
    }

    /// Helper constructor for parse errors.
    pub fn parse_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        CalculatorError::Parse { context: context.into(), details: details.into() }
    }

    /// Helper constructor for rejected commands.
    pub fn invalid_command(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CalculatorError::InvalidCommand { input: input.into(), reason: reason.into() }
    }

    /// Helper constructor for configuration errors.
    pub fn config_error(reason: impl Into<String>) -> Self {
        CalculatorError::Config { reason: reason.into() }
    }
}

impl From<std::io::Error> for CalculatorError {
    fn from(err: std::io::Error) -> Self {
        CalculatorError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}

impl From<serde_yaml_ng::Error> for CalculatorError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        CalculatorError::Parse { context: "YAML".to_string(), details: err.to_string() }
    }
}
