//! # Feedback Report Module
//!
//! Serialises a [`ResultsTable`] as a two-column CSV file.
//!
//! ## Output Example
//!
//! ```text
//! student id,feedback
//! ntid001234567,Your code was correct.
//! ntid007654321,"Line 4: missing semicolon.
//! The loop never terminates, ""i"" is not incremented."
//! ```
//!
//! ## Design Notes
//!
//! - Quoting follows RFC 4180 (via the `csv` crate): fields containing commas,
//!   quotes or line breaks are quoted and inner quotes doubled.
//! - The destination is truncated; there is no append or merge with older runs.

use crate::error::ReportError;
use crate::types::ResultsTable;
use std::path::Path;
use tracing::info;

/// Column labels of the report header.
pub const HEADER: [&str; 2] = ["student id", "feedback"];

/// Writes `table` to `destination`, replacing any existing file.
///
/// # Errors
/// Returns [`ReportError`] if the file cannot be created or written. Callers
/// treat this as fatal.
pub fn write_report(table: &ResultsTable, destination: &Path) -> Result<(), ReportError> {
    let csv_err = |source| ReportError::Csv {
        path: destination.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(destination).map_err(csv_err)?;
    writer.write_record(HEADER).map_err(csv_err)?;
    for record in table.iter() {
        writer
            .write_record([record.identifier.as_str(), record.feedback.as_str()])
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|source| ReportError::Io {
        path: destination.to_path_buf(),
        source,
    })?;

    info!(rows = table.len(), path = %destination.display(), "report written");
    Ok(())
}
