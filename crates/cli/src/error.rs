// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

/// ncss-report error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Metrics snapshot missing, unreadable, or from a newer format.
    #[error("snapshot error: {}: {message}", .path.display())]
    Snapshot { message: String, path: PathBuf },

    /// The metrics source reported a failure instead of metrics.
    #[error("{0}")]
    Source(String),
}

/// Result type using ncss-report Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Report written
    Success = 0,
    /// The metrics source failed; nothing to report
    SourceFailed = 1,
    /// Configuration, argument or snapshot error
    ConfigError = 2,
    /// Output could not be written, or another unexpected failure
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) | Error::Snapshot { .. } => {
                ExitCode::ConfigError
            }
            Error::Source(_) => ExitCode::SourceFailed,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
