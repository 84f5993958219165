//! Declared-vs-installed comparison.
//!
//! The differ reports every declared record whose `full_id` is not in the
//! installed list. Reports are written to a caller-supplied sink.
//!
//! # Example
//!
//! ```
//! use pkgcheck::declaration::PackageRecord;
//! use pkgcheck::differ::{report_missing, ReportFormat};
//! use pkgcheck::installed::InstalledList;
//!
//! let records = vec![PackageRecord::new("foo", "1.0"), PackageRecord::new("foo", "2.0")];
//! let installed = InstalledList::parse("foo@1.0\n");
//!
//! let mut out = Vec::new();
//! let count = report_missing(&records, &installed, ReportFormat::Text, &mut out).unwrap();
//! assert_eq!(count, 1);
//! assert_eq!(String::from_utf8(out).unwrap(), "foo@2.0\n");
//! ```

use std::io::Write;

use crate::declaration::PackageRecord;
use crate::error::Result;
use crate::installed::InstalledList;

/// How the missing set is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One `full_id` per line.
    #[default]
    Text,
    /// A JSON array of records.
    Json,
}

/// Records whose `full_id` is absent from `installed`, in input order.
///
/// Duplicate records are checked independently.
pub fn find_missing<'a>(
    records: &'a [PackageRecord],
    installed: &InstalledList,
) -> Vec<&'a PackageRecord> {
    records
        .iter()
        .filter(|record| !installed.contains(record.full_id()))
        .collect()
}

/// Write `missing` to `out` in the given format.
pub fn write_report(
    missing: &[&PackageRecord],
    format: ReportFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        ReportFormat::Text => {
            for record in missing {
                writeln!(out, "{}", record.full_id())?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, missing).map_err(anyhow::Error::from)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Find the missing records and write them to `out`.
///
/// Returns the number of missing records.
pub fn report_missing(
    records: &[PackageRecord],
    installed: &InstalledList,
    format: ReportFormat,
    out: &mut dyn Write,
) -> Result<usize> {
    let missing = find_missing(records, installed);
    tracing::debug!(
        "{} of {} declared package(s) missing",
        missing.len(),
        records.len()
    );
    write_report(&missing, format, out)?;
    Ok(missing.len())
}
