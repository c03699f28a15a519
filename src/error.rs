//! Error types for vergap operations.
//!
//! This module defines [`VergapError`], the error type used by the
//! configuration and CLI layers, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The advisor core never fails: disabled mode and unparseable versions
//!   both produce an empty advisory instead of an error
//! - Use `VergapError` for configuration and input problems the user can fix
//! - Use `anyhow::Error` (via `VergapError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vergap operations.
#[derive(Debug, Error)]
pub enum VergapError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An advisor input was not supplied by flag, environment, or config.
    #[error(
        "Missing input '{name}': pass --{} or set VERGAP_{}",
        .name.replace('_', "-"),
        .name.to_uppercase()
    )]
    MissingInput { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VergapError {
    /// Whether this error was caused by user-supplied configuration or input.
    ///
    /// These map to exit code 2 in the CLI.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
                | Self::MissingInput { .. }
        )
    }
}

/// Result type alias for vergap operations.
pub type Result<T> = std::result::Result<T, VergapError>;
