//! pkgcheck - Report declared package versions missing from an installed list.
//!
//! pkgcheck reads a directory of YAML package declarations, one file per
//! package, and prints every declared `name@version` that does not appear in
//! a plain-text list of installed packages.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`declaration`] - Declaration schema, records, and directory scanning
//! - [`differ`] - Missing-set computation and report output
//! - [`error`] - Error types and result aliases
//! - [`installed`] - Installed package list
//! - [`paths`] - Input path validation
//! - [`ui`] - Report sink and terminal diagnostics
//!
//! # Example
//!
//! ```
//! use pkgcheck::declaration::{collect_records, ScanOptions};
//! use pkgcheck::differ::find_missing;
//! use pkgcheck::installed::InstalledList;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("foo.yaml"), "versions:\n  1.0: {}\n  2.0: {}\n").unwrap();
//!
//! let collection = collect_records(temp.path(), &ScanOptions::default()).unwrap();
//! let installed = InstalledList::parse("foo@1.0\n");
//!
//! let missing: Vec<&str> = find_missing(&collection.records, &installed)
//!     .into_iter()
//!     .map(|r| r.full_id())
//!     .collect();
//! assert_eq!(missing, vec!["foo@2.0"]);
//! ```

pub mod cli;
pub mod declaration;
pub mod differ;
pub mod error;
pub mod installed;
pub mod paths;
pub mod ui;

pub use error::{PkgcheckError, Result};
