//! Declaration directory scanning.
//!
//! The collector reads every declaration file in a directory and flattens
//! them into one [`PackageRecord`] per declared version.

use std::fs;
use std::path::{Path, PathBuf};

use crate::declaration::record::PackageRecord;
use crate::declaration::schema::{parse_declaration, DeclarationFile};
use crate::error::{PkgcheckError, Result};

/// Extension recognized when no other is configured.
pub const DEFAULT_EXTENSION: &str = "yaml";

/// Options controlling which files are read and how bad ones are handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Recognized declaration extensions, without the leading dot.
    pub extensions: Vec<String>,

    /// Skip malformed declarations instead of failing the scan.
    pub skip_malformed: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            skip_malformed: false,
        }
    }
}

impl ScanOptions {
    /// Build options from user-supplied extensions.
    ///
    /// Leading dots are stripped and empty entries dropped. Falls back to
    /// [`DEFAULT_EXTENSION`] when nothing usable remains.
    pub fn new<I, S>(extensions: I, skip_malformed: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extensions: Vec<String> = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();

        if extensions.is_empty() {
            extensions.push(DEFAULT_EXTENSION.to_string());
        }

        Self {
            extensions,
            skip_malformed,
        }
    }
}

/// A declaration file left out of the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDeclaration {
    /// The file that was skipped.
    pub path: PathBuf,
    /// Why it could not be used.
    pub reason: String,
}

/// Result of scanning a declarations directory.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Every declared `(name, version)` pair, in discovery order.
    pub records: Vec<PackageRecord>,

    /// Malformed files skipped because `skip_malformed` was set.
    pub skipped: Vec<SkippedDeclaration>,
}

/// Check whether `path` has one of the recognized declaration extensions.
///
/// The comparison is case-sensitive.
pub fn is_declaration(path: &Path, options: &ScanOptions) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| options.extensions.iter().any(|e| e == ext))
}

/// Read and parse a single declaration file.
///
/// Content that is not UTF-8 is a malformed declaration, not an IO failure.
pub fn load_declaration(path: &Path) -> Result<DeclarationFile> {
    let bytes = fs::read(path)?;
    let content =
        std::str::from_utf8(&bytes).map_err(|e| PkgcheckError::MalformedDeclaration {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    parse_declaration(content, path)
}

/// Expand a parsed declaration into one record per version.
pub fn records_for(name: &str, declaration: &DeclarationFile) -> Vec<PackageRecord> {
    declaration
        .version_ids()
        .map(|version| PackageRecord::new(name, version))
        .collect()
}

/// Scan `dir` and collect a record for every declared version.
///
/// Entries are visited in file-name order so repeated scans of the same
/// directory produce the same sequence. Subdirectories and files without a
/// recognized extension are ignored.
///
/// # Errors
///
/// Returns `Io` if the directory or a declaration cannot be read.
/// Returns `MalformedDeclaration` for the first bad file unless
/// `options.skip_malformed` is set.
pub fn collect_records(dir: &Path, options: &ScanOptions) -> Result<Collection> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    paths.sort();

    let mut collection = Collection::default();

    for path in paths {
        if !path.is_file() || !is_declaration(&path, options) {
            tracing::debug!("Ignoring {}", path.display());
            continue;
        }

        let name = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => continue,
        };

        let declaration = match load_declaration(&path) {
            Ok(d) => d,
            Err(PkgcheckError::MalformedDeclaration { path, message })
                if options.skip_malformed =>
            {
                tracing::debug!("Skipping {}: {}", path.display(), message);
                collection.skipped.push(SkippedDeclaration {
                    path,
                    reason: message,
                });
                continue;
            }
            Err(e) => return Err(e),
        };

        let records = records_for(&name, &declaration);
        tracing::debug!(
            "{} declares {} version(s) in {}",
            name,
            records.len(),
            path.display()
        );
        collection.records.extend(records);
    }

    tracing::debug!("Collected {} package record(s)", collection.records.len());
    for record in &collection.records {
        tracing::debug!("  {}", record);
    }

    Ok(collection)
}
