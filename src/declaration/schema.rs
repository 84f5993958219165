//! Declaration file schema.

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;

use crate::error::{PkgcheckError, Result};

/// Parsed contents of a single declaration file.
///
/// Only `versions` is read. Other top-level keys are accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeclarationFile {
    /// Version keys in file order, as their raw text.
    ///
    /// Values describe each version but are not used when diffing. Keys with
    /// the same text (`1.0` and `"1.0"`) are kept as separate entries. A key
    /// that is present with no value (`versions:`) is an empty set.
    #[serde(deserialize_with = "version_keys")]
    pub versions: Vec<String>,
}

impl DeclarationFile {
    /// Version identifiers declared by this file.
    pub fn version_ids(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(String::as_str)
    }
}

struct VersionKeys;

impl<'de> Visitor<'de> for VersionKeys {
    type Value = Vec<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of versions")
    }

    fn visit_none<E: serde::de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_unit<E: serde::de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut keys = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, IgnoredAny)) = map.next_entry::<String, IgnoredAny>()? {
            keys.push(key);
        }
        Ok(keys)
    }
}

fn version_keys<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(VersionKeys)
}

/// Parse YAML content into a [`DeclarationFile`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_declaration(content: &str, source_path: &Path) -> Result<DeclarationFile> {
    serde_yaml::from_str(content).map_err(|e| PkgcheckError::MalformedDeclaration {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
