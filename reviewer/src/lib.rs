//! # Reviewer Library
//!
//! Batch feedback for programming submissions: every matching file in a folder is
//! sent to a language model with a fixed review prompt and the replies are
//! collected into a CSV report keyed by an identifier taken from the filename.
//!
//! ## Key Concepts
//! - **Submission**: one source file found by [`submission::scan_folder`].
//! - **Analyzer**: pluggable feedback source ([`traits::analyzer::Analyzer`]); the
//!   production one is [`feedback::gemini::GeminiClient`].
//! - **ReviewJob**: runs the analyzer over every submission, one at a time.
//! - **Report**: [`report::write_report`] turns the [`types::ResultsTable`] into CSV.

pub mod error;
pub mod feedback;
pub mod report;
pub mod submission;
pub mod traits;
pub mod types;

use crate::submission::Submission;
use crate::traits::analyzer::Analyzer;
use crate::types::ResultsTable;
use tracing::{error, info};

/// A review run over a fixed list of submissions.
///
/// Submissions are analysed strictly in order; each analyzer call completes
/// before the next file is read. A failing submission never stops the run.
pub struct ReviewJob<'a> {
    submissions: Vec<Submission>,
    analyzer: Box<dyn Analyzer + Send + Sync + 'a>,
}

impl<'a> ReviewJob<'a> {
    pub fn new<A: Analyzer + Send + Sync + 'a>(submissions: Vec<Submission>, analyzer: A) -> Self {
        Self {
            submissions,
            analyzer: Box::new(analyzer),
        }
    }

    /// Analyses every submission and returns one feedback entry per submission.
    ///
    /// Read or analysis failures are stored as diagnostic text (see
    /// [`AnalysisError::diagnostic`](crate::error::AnalysisError::diagnostic)).
    pub async fn run(self) -> ResultsTable {
        let mut results = ResultsTable::new();

        for submission in &self.submissions {
            println!("{}", submission.filename);

            match self.review(submission).await {
                Ok(text) => {
                    println!("Analysis completed for {}", submission.identifier);
                    info!(identifier = %submission.identifier, "analysis completed");
                    results.insert(submission.identifier.clone(), text);
                }
                Err(e) => {
                    println!("Error processing {}: {}", submission.filename, e);
                    error!(filename = %submission.filename, error = %e, "analysis failed");
                    results.insert(submission.identifier.clone(), e.diagnostic());
                }
            }
        }

        results
    }

    async fn review(&self, submission: &Submission) -> Result<String, error::AnalysisError> {
        let content = submission.read_content()?;
        println!("Processing {}...", submission.filename);
        self.analyzer.analyze(&content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::submission::scan_folder;
    use async_trait::async_trait;
    use std::fs;
    use std::sync::Mutex;
    use util::test_helpers::submission_folder;

    /// Replies with a fixed text and remembers what it was asked.
    struct FixedAnalyzer {
        reply: String,
        seen: Mutex<Vec<String>>,
    }

    impl FixedAnalyzer {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl<'r> Analyzer for &'r FixedAnalyzer {
        async fn analyze(&self, content: &str) -> Result<String, AnalysisError> {
            self.seen.lock().unwrap().push(content.to_string());
            Ok(self.reply.clone())
        }
    }

    /// Fails for any content containing `marker`.
    struct FailingOn {
        marker: &'static str,
    }

    #[async_trait]
    impl Analyzer for FailingOn {
        async fn analyze(&self, content: &str) -> Result<String, AnalysisError> {
            if content.contains(self.marker) {
                Err(AnalysisError::Status {
                    status: 503,
                    body: "model overloaded".into(),
                })
            } else {
                Ok(format!("reviewed {} bytes", content.len()))
            }
        }
    }

    #[tokio::test]
    async fn correct_code_gets_literal_reply() {
        let dir = submission_folder(&[("studentid001234567.c", "int main(void) { return 0; }")])
            .unwrap();
        let subs = scan_folder(dir.path(), ".c").unwrap();
        let analyzer = FixedAnalyzer::new("Your code was correct.");

        let results = ReviewJob::new(subs, &analyzer).run().await;

        assert_eq!(results.len(), 1);
        assert_eq!(results.get("ntid001234567"), Some("Your code was correct."));
        assert_eq!(
            *analyzer.seen.lock().unwrap(),
            vec!["int main(void) { return 0; }".to_string()]
        );
    }

    #[tokio::test]
    async fn one_entry_per_matched_file() {
        let dir = submission_folder(&[
            ("u00000000000001.c", "a"),
            ("u00000000000002.c", "a"),
            ("u00000000000003.c", "b"),
            ("ignored.txt", "c"),
        ])
        .unwrap();
        let subs = scan_folder(dir.path(), ".c").unwrap();
        let matched = subs.len();
        let analyzer = FixedAnalyzer::new("ok");

        let results = ReviewJob::new(subs, &analyzer).run().await;

        assert_eq!(matched, 3);
        assert_eq!(results.len(), matched);
        // identical content is still sent once per file
        assert_eq!(analyzer.seen.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn analyzer_failure_does_not_abort_batch() {
        let dir = submission_folder(&[
            ("u00000000000001.c", "fine"),
            ("u00000000000002.c", "BOOM"),
            ("u00000000000003.c", "also fine"),
        ])
        .unwrap();
        let subs = scan_folder(dir.path(), ".c").unwrap();

        let results = ReviewJob::new(subs, FailingOn { marker: "BOOM" }).run().await;

        assert_eq!(results.len(), 3);
        assert_eq!(results.get("0000000000001"), Some("reviewed 4 bytes"));
        assert_eq!(
            results.get("0000000000002"),
            Some("Error processing file: model service returned 503: model overloaded")
        );
        assert_eq!(results.get("0000000000003"), Some("reviewed 9 bytes"));
    }

    #[tokio::test]
    async fn unreadable_file_gets_error_row() {
        let dir = submission_folder(&[
            ("u00000000000001.c", "int x;"),
            ("u00000000000002.c", "int y;"),
        ])
        .unwrap();
        let subs = scan_folder(dir.path(), ".c").unwrap();
        fs::remove_file(dir.path().join("u00000000000002.c")).unwrap();
        let analyzer = FixedAnalyzer::new("Looks fine.");

        let results = ReviewJob::new(subs, &analyzer).run().await;

        assert_eq!(results.len(), 2);
        assert_eq!(results.get("0000000000001"), Some("Looks fine."));
        assert_eq!(results.get("0000000000002"), Some("Error: File not found."));
        assert_eq!(analyzer.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn no_submissions_yield_empty_table() {
        let analyzer = FixedAnalyzer::new("unused");
        let results = ReviewJob::new(Vec::new(), &analyzer).run().await;
        assert!(results.is_empty());
    }
}
