//! Error types for pkgcheck operations.
//!
//! This module defines [`PkgcheckError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `InvalidPath` is raised before any work starts and is reported at the CLI boundary
//! - `MalformedDeclaration` aborts a run unless the caller opted into skipping bad files
//! - Use `anyhow::Error` (via `PkgcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::paths::PathKind;

/// Core error type for pkgcheck operations.
#[derive(Debug, Error)]
pub enum PkgcheckError {
    /// A required input path is missing or is not the expected kind.
    #[error("Invalid {kind}, missing {} in: {}", .path.display(), .cwd.display())]
    InvalidPath {
        path: PathBuf,
        kind: PathKind,
        cwd: PathBuf,
    },

    /// A declaration file is not UTF-8 YAML or lacks a `versions` mapping.
    #[error("Malformed declaration {}: {message}", .path.display())]
    MalformedDeclaration { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pkgcheck operations.
pub type Result<T> = std::result::Result<T, PkgcheckError>;
