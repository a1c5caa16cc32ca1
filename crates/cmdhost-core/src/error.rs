//! Error types for cmdhost-core

use thiserror::Error;

/// Core error type for host and extension operations
#[derive(Debug, Error)]
pub enum Error {
    /// Argument parsing failed or help/version display was requested
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// No command registered under this name
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Parsed operation has no handler in the operation table
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Operation table declared the same verb twice
    #[error("Duplicate operation in operation table: {0}")]
    DuplicateOperation(String),

    /// Settings file could not be read or parsed
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Writing command output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Usage errors defer to clap, which uses 0 for help/version display
    /// and 2 for invalid input.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(err) => err.exit_code(),
            Self::UnknownCommand(_) | Self::UnknownOperation(_) => 2,
            Self::DuplicateOperation(_) | Self::InvalidSettings(_) | Self::Io(_) => 1,
        }
    }
}

/// Result type alias for cmdhost-core operations
pub type Result<T> = std::result::Result<T, Error>;
