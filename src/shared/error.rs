use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a rejected invocation apart from a
/// failed remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The command completed
    Success = 0,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Errors raised while talking to Gemnasium or handling local project state.
///
/// Every variant aborts the running command, except a failed dump which the
/// dump use case downgrades to a warning.
#[derive(Debug, Error)]
pub enum GemnasiumError {
    /// Missing or empty user input
    #[error("{message}")]
    Validation { message: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory with --path")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Can't load configuration file: {path}\nDetails: {details}\n\n💡 Hint: The file must be a flat TOML table of string values")]
    ConfigLoad { path: PathBuf, details: String },

    #[error("Can't read dependency inventory: {path}\nDetails: {details}\n\n💡 Hint: Export the resolved dependency graph of the project first, or point --inventory at it")]
    InventoryRead { path: PathBuf, details: String },

    #[error("can't connect to Gemnasium API: {url}\nDetails: {details}\n\n💡 Hint: Please check network connection and configuration")]
    Network { url: String, details: String },

    #[error("API Error ({status}): {message}")]
    Http { status: u16, message: String },

    #[error("malformed API response: {details}")]
    Protocol { details: String },

    #[error("Project was created but the configuration can't be stored in {path}. Your project slug is: {slug}\nDetails: {details}")]
    Persist {
        slug: String,
        path: PathBuf,
        details: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    #[error("Failed to serialize {what}: {details}")]
    Serialization { what: String, details: String },
}

impl GemnasiumError {
    pub fn validation(message: impl Into<String>) -> Self {
        GemnasiumError::Validation {
            message: message.into(),
        }
    }

    pub fn protocol(details: impl Into<String>) -> Self {
        GemnasiumError::Protocol {
            details: details.into(),
        }
    }
}
