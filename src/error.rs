//! Error types for module-matrix operations.
//!
//! This module defines [`MatrixError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MatrixError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `MatrixError::Other`) for unexpected errors
//! - Metadata parse problems are recovered locally (the module is skipped with
//!   a warning) and never reach this type

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for module-matrix operations.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// A non-rolling host has no major-version fact to build its OS key from.
    #[error("No {version_fact} fact for '{certname}' (operatingsystem {os}); cannot build an OS key")]
    MissingVersionFact {
        certname: String,
        os: String,
        version_fact: String,
    },

    /// A PuppetDB query failed or returned a non-success status.
    #[error("PuppetDB query for {what} failed: {message}")]
    Query { what: String, message: String },

    /// The cache file exists but cannot be deserialized.
    #[error("Failed to parse cache file at {path}: {message}")]
    CacheParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for module-matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
