//! # Feedback Generation
//!
//! - [`prompt`]: the fixed review instructions wrapped around a file's content.
//! - [`gemini`]: the [`Analyzer`](crate::traits::analyzer::Analyzer) that sends that prompt to Gemini.

pub mod gemini;
pub mod prompt;
