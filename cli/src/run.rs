//! One batch run from folder to report, with the console messages for each outcome.

use anyhow::{Context, Result};
use reviewer::ReviewJob;
use reviewer::error::ScanError;
use reviewer::report::write_report;
use reviewer::submission::scan_folder;
use reviewer::traits::analyzer::Analyzer;
use std::path::{Path, PathBuf};
use tracing::warn;
use util::config::AppConfig;
use util::languages::Language;

/// How a run ended. Every variant is a normal exit.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The input folder does not exist.
    FolderMissing,
    /// The input folder has no entries.
    FolderEmpty,
    /// No entry matched the suffix; no report was written.
    NothingProcessed,
    /// The report was written with `rows` entries.
    Saved { path: PathBuf, rows: usize },
}

/// Scans `folder`, reviews every matching file with `analyzer`, and writes the report.
///
/// # Errors
/// Listing failures and report write failures are returned; per-file failures are not.
pub async fn execute<A>(folder: &Path, config: &AppConfig, analyzer: A) -> Result<Outcome>
where
    A: Analyzer + Send + Sync,
{
    let lang = Language::from_suffix(&config.file_suffix).display_name();

    let submissions = match scan_folder(folder, &config.file_suffix) {
        Ok(submissions) => submissions,
        Err(ScanError::NotFound(_)) => {
            println!("Error: The folder '{}' does not exist.", folder.display());
            println!("Please create the folder and place the {lang} files inside it.");
            return Ok(Outcome::FolderMissing);
        }
        Err(ScanError::Empty(_)) => {
            println!("Warning: The folder '{}' is empty.", folder.display());
            return Ok(Outcome::FolderEmpty);
        }
        Err(e) => return Err(e).context("scanning submission folder"),
    };

    println!("Starting analysis of {lang} files in '{}'...", folder.display());

    let results = ReviewJob::new(submissions, analyzer).run().await;

    if results.is_empty() {
        warn!(suffix = %config.file_suffix, "no matching files");
        println!("\nNo {lang} files were found or processed.");
        return Ok(Outcome::NothingProcessed);
    }

    write_report(&results, &config.output_file)?;
    println!("\nFeedback has been saved to {}", config.output_file.display());

    Ok(Outcome::Saved {
        path: config.output_file.clone(),
        rows: results.len(),
    })
}
