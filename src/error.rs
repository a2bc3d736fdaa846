//! Error types for kmodcheck operations.
//!
//! This module defines [`KmodcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `KmodcheckError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `KmodcheckError::Other`) for unexpected errors
//! - Per-file inspection failures are skip-and-report during a scan; only
//!   infrastructure failures (an unreadable root) abort a run

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for kmodcheck operations.
#[derive(Debug, Error)]
pub enum KmodcheckError {
    /// A scan root does not exist or cannot be read.
    #[error("Cannot read path: {path}")]
    RootNotFound { path: PathBuf },

    /// A module's metadata could not be parsed.
    #[error("Failed to inspect {path}: {message}")]
    InspectionFailed { path: PathBuf, message: String },

    /// A metadata line is malformed.
    #[error("Malformed metadata at {path}:{line}: {message}")]
    MetadataParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for kmodcheck operations.
pub type Result<T> = std::result::Result<T, KmodcheckError>;
