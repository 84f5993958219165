//! Declared package records.

use std::fmt;

use serde::Serialize;

/// One declared `(name, version)` pair.
///
/// The `full_id` (`name@version`) is computed once at construction and is the
/// unit of comparison against the installed list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PackageRecord {
    name: String,
    version: String,
    full_id: String,
}

impl PackageRecord {
    /// Create a record for `name` at `version`.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let name = name.into();
        let version = version.into();
        let full_id = format!("{}@{}", name, version);
        Self {
            name,
            version,
            full_id,
        }
    }

    /// Package name (the declaration file stem).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The `name@version` identifier.
    pub fn full_id(&self) -> &str {
        &self.full_id
    }
}

impl fmt::Display for PackageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_id)
    }
}
