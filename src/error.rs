//! Error types for launcher operations.
//!
//! This module defines [`LaunchError`], the primary error type used throughout
//! the launcher, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LaunchError` for domain-specific errors that map to exit codes
//! - Use `anyhow::Error` (via `LaunchError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// One or more required executables could not be found on PATH.
    #[error("Missing required command(s): {}", tools.join(", "))]
    MissingTooling { tools: Vec<String> },

    /// The dependency install command exited non-zero.
    #[error("Dependency install failed with exit code {code}")]
    InstallFailed { code: i32 },

    /// A collaborator process could not be started at all.
    #[error("Failed to start '{command}': {source}")]
    SpawnFailed {
        command: String,
        source: std::io::Error,
    },

    /// Failed to parse the launcher configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LaunchError>;
