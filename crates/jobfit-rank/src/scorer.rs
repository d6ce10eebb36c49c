//! The pluggable scoring capability.

use crate::{Document, ScoreError, ScoredDocument};

/// A backend that scores candidates against a query.
///
/// Every implementation returns each candidate exactly once, with a score in
/// `[0, 100]`, sorted by score descending then title ascending.
pub trait Scorer: Send + Sync {
    /// Short backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Scores and orders the candidates.
    fn score(
        &self,
        query: &str,
        candidates: &[Document],
    ) -> Result<Vec<ScoredDocument>, ScoreError>;
}
