//!
//! Traits Module
//!
//! Seams of the reviewer pipeline.
//!
//! - [`analyzer`]: turns one submission's source text into prose feedback.

pub mod analyzer;
