//! Package declarations: schema, records, and directory collection.
//!
//! A declaration is a YAML file named after the package it describes, with a
//! `versions` mapping whose keys are the versions on offer:
//!
//! ```yaml
//! # foo.yaml
//! versions:
//!   "1.0": {}
//!   "2.0": {}
//! ```
//!
//! # Example
//!
//! ```
//! use pkgcheck::declaration::{collect_records, ScanOptions};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("foo.yaml"), "versions:\n  1.0: {}\n").unwrap();
//!
//! let collection = collect_records(temp.path(), &ScanOptions::default()).unwrap();
//! assert_eq!(collection.records[0].full_id(), "foo@1.0");
//! ```

pub mod collector;
pub mod record;
pub mod schema;

pub use collector::{
    collect_records, is_declaration, load_declaration, records_for, Collection, ScanOptions,
    SkippedDeclaration, DEFAULT_EXTENSION,
};
pub use record::PackageRecord;
pub use schema::{parse_declaration, DeclarationFile};
