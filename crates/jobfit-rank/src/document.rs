//! Input and output records for ranking.

use serde::{Deserialize, Serialize};

/// A candidate document: an identifier, a title used for tie-breaking, and raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque identifier, round-tripped into results.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Raw text to compare against the query.
    pub text: String,
}

impl Document {
    /// Creates a new document.
    pub fn new(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: text.into(),
        }
    }
}

/// A candidate paired with its integer score in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// The original candidate.
    #[serde(flatten)]
    pub document: Document,
    /// Similarity score, 0 (unrelated) to 100 (identical).
    pub score: u8,
}

impl ScoredDocument {
    /// Identifier of the scored candidate.
    pub fn id(&self) -> &str {
        &self.document.id
    }

    /// Title of the scored candidate.
    pub fn title(&self) -> &str {
        &self.document.title
    }
}

/// Sorts results best-first.
///
/// Score descending, then title ascending, then id ascending, so the order never
/// depends on input order.
pub fn sort_best_first(results: &mut [ScoredDocument]) {
    results.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.document.title.cmp(&b.document.title))
            .then_with(|| a.document.id.cmp(&b.document.id))
    });
}
