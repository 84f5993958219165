//! Input path validation.
//!
//! Both inputs are checked up front so a bad path is reported before any
//! declaration is parsed.

use std::fmt;
use std::path::Path;

use crate::error::{PkgcheckError, Result};

/// The kind of filesystem object an input path must point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Directory => f.write_str("directory"),
        }
    }
}

impl PathKind {
    /// Check whether `path` exists and is of this kind.
    ///
    /// Symlinks are followed.
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            Self::File => path.is_file(),
            Self::Directory => path.is_dir(),
        }
    }
}

/// Ensure `path` exists and is of the expected kind.
///
/// The returned [`PkgcheckError::InvalidPath`] carries the current working
/// directory so relative paths can be diagnosed.
pub fn validate_path(path: &Path, kind: PathKind) -> Result<()> {
    if kind.matches(path) {
        return Ok(());
    }

    tracing::debug!("{} is not a {}", path.display(), kind);
    Err(PkgcheckError::InvalidPath {
        path: path.to_path_buf(),
        kind,
        cwd: std::env::current_dir().unwrap_or_default(),
    })
}
