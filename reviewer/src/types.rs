//! # Types Module
//!
//! Core data structures produced by a review run.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Feedback for one submission: the model's prose or a diagnostic string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Identifier of the submission this feedback belongs to.
    #[serde(rename = "student id")]
    pub identifier: String,
    /// Feedback text, stored verbatim.
    pub feedback: String,
}

/// Identifier → feedback mapping accumulated during a run.
///
/// Keys are unique and iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsTable {
    records: Vec<FeedbackRecord>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `feedback` under `identifier`.
    ///
    /// An identifier that is already present keeps its position and has its
    /// text replaced; two submissions mapping to the same key is logged.
    pub fn insert(&mut self, identifier: impl Into<String>, feedback: impl Into<String>) {
        let identifier = identifier.into();
        let feedback = feedback.into();

        match self.records.iter_mut().find(|r| r.identifier == identifier) {
            Some(existing) => {
                warn!(
                    identifier = identifier.as_str(),
                    "duplicate identifier; earlier feedback replaced"
                );
                existing.feedback = feedback;
            }
            None => self.records.push(FeedbackRecord {
                identifier,
                feedback,
            }),
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.identifier == identifier)
            .map(|r| r.feedback.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedbackRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut table = ResultsTable::new();
        table.insert("b", "second");
        table.insert("a", "first");
        let ids: Vec<&str> = table.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn duplicate_key_replaces_in_place() {
        let mut table = ResultsTable::new();
        table.insert("x", "old");
        table.insert("y", "other");
        table.insert("x", "new");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("x"), Some("new"));
        assert_eq!(table.iter().next().unwrap().identifier, "x");
    }

    #[test]
    fn empty_table() {
        let table = ResultsTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get("missing"), None);
    }
}
