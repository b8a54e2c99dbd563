//!
//! Submission Enumeration
//!
//! Lists the input folder, keeps the entries whose filename ends with the
//! configured suffix, and derives each submission's identifier from its filename.
//!
//! # Identifier
//!
//! The identifier is the fixed-width tail of the filename stem: the suffix is
//! dropped and the last [`IDENTIFIER_LEN`] characters of what remains are kept.
//! LMS exports embed the student number at the end of a longer name, e.g.
//! `studentid001234567.c` → `ntid001234567`.

use crate::error::{AnalysisError, ScanError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Number of characters kept from the end of the filename stem.
pub const IDENTIFIER_LEN: usize = 13;

/// One input file to be analysed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Location on disk.
    pub path: PathBuf,
    /// Filename as listed in the folder.
    pub filename: String,
    /// Key under which this submission's feedback is reported.
    pub identifier: String,
}

impl Submission {
    pub fn new(path: PathBuf, filename: String, suffix: &str) -> Self {
        let identifier = derive_identifier(&filename, suffix);
        Self {
            path,
            filename,
            identifier,
        }
    }

    /// Reads the full file content as UTF-8.
    ///
    /// # Errors
    /// [`AnalysisError::NotFound`] if the file vanished since listing,
    /// [`AnalysisError::Io`] for other read failures and
    /// [`AnalysisError::Encoding`] for non-UTF-8 content.
    pub fn read_content(&self) -> Result<String, AnalysisError> {
        let bytes = fs::read(&self.path)?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Derives the identifier for `filename`: drop `suffix`, keep the last
/// [`IDENTIFIER_LEN`] characters.
///
/// Names whose stem is shorter than [`IDENTIFIER_LEN`] yield the whole stem;
/// a warning is logged because the report key is then not fixed-width.
pub fn derive_identifier(filename: &str, suffix: &str) -> String {
    let chars: Vec<char> = filename.chars().collect();
    let stem_len = chars.len().saturating_sub(suffix.chars().count());
    let start = stem_len.saturating_sub(IDENTIFIER_LEN);
    let identifier: String = chars[start..stem_len].iter().collect();

    if stem_len < IDENTIFIER_LEN {
        warn!(
            filename,
            identifier = identifier.as_str(),
            "filename is shorter than expected; identifier is not {IDENTIFIER_LEN} characters"
        );
    }

    identifier
}

/// Lists `folder` and returns one [`Submission`] per entry ending in `suffix`.
///
/// Matching is case-sensitive. Entries are not filtered by type, so a matching
/// entry that cannot be read still produces a submission (and later an error row).
/// Results are sorted by filename.
///
/// # Errors
/// - [`ScanError::NotFound`] if `folder` does not exist.
/// - [`ScanError::Empty`] if `folder` has no entries at all.
/// - [`ScanError::Io`] if the folder cannot be listed.
pub fn scan_folder(folder: &Path, suffix: &str) -> Result<Vec<Submission>, ScanError> {
    if !folder.exists() {
        return Err(ScanError::NotFound(folder.to_path_buf()));
    }

    let io_err = |source| ScanError::Io {
        path: folder.to_path_buf(),
        source,
    };

    let mut seen_any = false;
    let mut submissions = Vec::new();
    for entry in fs::read_dir(folder).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        seen_any = true;

        let filename = entry.file_name().to_string_lossy().into_owned();
        if !filename.ends_with(suffix) {
            debug!(filename = %filename, "skipping entry without suffix {suffix}");
            continue;
        }
        submissions.push(Submission::new(entry.path(), filename, suffix));
    }

    if !seen_any {
        return Err(ScanError::Empty(folder.to_path_buf()));
    }

    submissions.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(submissions)
}
