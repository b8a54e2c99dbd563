//!
//! # Analyzer Trait
//!
//! An [`Analyzer`] takes the full text of one submission and returns the
//! feedback to store for it. The production implementation is
//! [`GeminiClient`](crate::feedback::gemini::GeminiClient); tests supply scripted fakes.
//!

use crate::error::AnalysisError;
use async_trait::async_trait;

/// A pluggable source of feedback for a single submission.
///
/// # Returns
/// - `Ok(String)`: the feedback text, verbatim as produced.
/// - `Err(AnalysisError)`: the submission could not be analysed. The caller
///   records a diagnostic instead and moves on.
#[async_trait]
pub trait Analyzer {
    async fn analyze(&self, content: &str) -> Result<String, AnalysisError>;
}
