//! Reviewer Error Types
//!
//! Three error families, one per pipeline stage:
//!
//! - [`ScanError`]: the input folder cannot be enumerated. Handled at run level.
//! - [`AnalysisError`]: one submission could not be read or analysed. Handled per
//!   submission; it is turned into a diagnostic string and the batch continues.
//! - [`ReportError`]: the CSV report cannot be written. Fatal for the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while listing the input folder.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The folder does not exist.
    #[error("folder '{}' does not exist", .0.display())]
    NotFound(PathBuf),
    /// The folder exists but has no entries at all.
    #[error("folder '{}' is empty", .0.display())]
    Empty(PathBuf),
    /// The folder could not be listed.
    #[error("failed to list folder '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure while reading or analysing a single submission.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The file was listed but is gone by the time it is read.
    #[error("file not found")]
    NotFound,
    /// Any other I/O failure (permissions, is a directory, ...).
    #[error("{0}")]
    Io(#[source] io::Error),
    /// The file is not valid UTF-8.
    #[error("file is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    /// The HTTP request could not be completed.
    #[error("request to model failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("model service returned {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body did not have the expected shape.
    #[error("error decoding response body: {message}. Full response: {body}")]
    Decode { message: String, body: String },
    /// The response carried no candidate text (e.g. blocked by safety filters).
    #[error("model returned no text{}", finish_reason_suffix(.0))]
    EmptyResponse(Option<String>),
}

fn finish_reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|r| format!(" (finish reason: {r})"))
        .unwrap_or_default()
}

impl From<io::Error> for AnalysisError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            AnalysisError::NotFound
        } else {
            AnalysisError::Io(err)
        }
    }
}

impl AnalysisError {
    /// Text stored in the report in place of feedback.
    pub fn diagnostic(&self) -> String {
        match self {
            AnalysisError::NotFound => "Error: File not found.".to_string(),
            other => format!("Error processing file: {other}"),
        }
    }
}

/// Failure while writing the CSV report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write report to '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write report to '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
