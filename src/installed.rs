//! Installed package list.
//!
//! The installed list is a plain text file with one `name@version`
//! identifier per line.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Identifiers of installed packages.
///
/// Lines are kept in file order with surrounding whitespace stripped; blank
/// lines are dropped. Membership is exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct InstalledList {
    entries: Vec<String>,
    index: HashSet<String>,
}

impl InstalledList {
    /// Build a list from raw file content.
    pub fn parse(content: &str) -> Self {
        content.lines().collect()
    }

    /// Read the installed list at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let list = Self::parse(&content);
        tracing::debug!(
            "Loaded {} installed identifier(s) from {}",
            list.len(),
            path.display()
        );
        Ok(list)
    }

    /// Check whether `full_id` is installed.
    pub fn contains(&self, full_id: &str) -> bool {
        self.index.contains(full_id)
    }

    /// Installed identifiers in file order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of identifiers, counting repeats.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no identifiers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for InstalledList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries: Vec<String> = iter
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        let index = entries.iter().cloned().collect();
        Self { entries, index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_one_identifier_per_line() {
        let list = InstalledList::parse("foo@1.0\nbar@3.1\n");
        assert_eq!(list.entries(), &["foo@1.0", "bar@3.1"]);
        assert!(list.contains("foo@1.0"));
        assert!(list.contains("bar@3.1"));
    }

    #[test]
    fn parse_strips_whitespace_and_blank_lines() {
        let list = InstalledList::parse("  foo@1.0  \r\n\tbar@3.1\n\n   \n");
        assert_eq!(list.len(), 2);
        assert!(list.contains("foo@1.0"));
        assert!(list.contains("bar@3.1"));
        assert!(!list.contains(""));
    }

    #[test]
    fn membership_is_exact() {
        let list = InstalledList::parse("foo@1.0\n");
        assert!(!list.contains("Foo@1.0"));
        assert!(!list.contains("foo@1"));
        assert!(!list.contains("foo@1.0.0"));
        assert!(!list.contains("foo"));
    }

    #[test]
    fn repeats_are_kept_in_entries() {
        let list = InstalledList::parse("foo@1.0\nfoo@1.0\n");
        assert_eq!(list.len(), 2);
        assert!(list.contains("foo@1.0"));
    }

    #[test]
    fn empty_content_is_empty() {
        let list = InstalledList::parse("");
        assert!(list.is_empty());
    }

    #[test]
    fn collects_from_iterator() {
        let list: InstalledList = vec![" a@1 ", "b@2"].into_iter().collect();
        assert_eq!(list.entries(), &["a@1", "b@2"]);
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("installed.txt");
        fs::write(&path, "foo@1.0\n").unwrap();

        let list = InstalledList::load(&path).unwrap();
        assert!(list.contains("foo@1.0"));
    }

    #[test]
    fn load_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        assert!(InstalledList::load(&temp.path().join("missing.txt")).is_err());
    }
}
