//! TF-IDF similarity ranking.
//!
//! Each call builds a fresh corpus from the query plus all candidates, weights
//! every document by TF-IDF over that corpus, and scores candidates by cosine
//! similarity to the query.

use std::iter;

use tracing::debug;

use crate::{
    Corpus, Document, ScoreError, ScoredDocument, Scorer, StopwordSet, Tokenizer,
    document::sort_best_first,
    vector::{cosine_similarity, to_score, weight},
};

/// The TF-IDF scoring backend.
///
/// Holds only its tokenizer; no state survives between calls.
#[derive(Debug, Clone, Default)]
pub struct TfIdfScorer {
    /// Tokenizer applied to the query and every candidate.
    tokenizer: Tokenizer,
}

impl TfIdfScorer {
    /// Creates a scorer using the built-in stopword list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scorer that drops the given stopword set.
    pub fn with_stopwords(set: StopwordSet) -> Self {
        Self {
            tokenizer: Tokenizer::with_stopwords(set),
        }
    }

    /// Scores candidates against the query and returns them best-first.
    ///
    /// An empty candidate list yields an empty result. A query with no tokens
    /// scores every candidate 0.
    pub fn rank(&self, query: &str, candidates: &[Document]) -> Vec<ScoredDocument> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let texts = iter::once(query).chain(candidates.iter().map(|c| c.text.as_str()));
        let corpus = Corpus::build(&self.tokenizer, texts);
        let n = corpus.len();
        let df = corpus.document_frequencies();
        debug!(documents = n, vocabulary = df.len(), "built tf-idf corpus");

        let vectors: Vec<_> = corpus
            .documents()
            .iter()
            .map(|tf| weight(tf, df, n))
            .collect();
        let (query_vec, candidate_vecs) = vectors.split_at(1);

        let mut results: Vec<ScoredDocument> = candidates
            .iter()
            .zip(candidate_vecs)
            .map(|(candidate, vec)| ScoredDocument {
                document: candidate.clone(),
                score: to_score(cosine_similarity(&query_vec[0], vec)),
            })
            .collect();

        sort_best_first(&mut results);
        results
    }
}

impl Scorer for TfIdfScorer {
    fn name(&self) -> &'static str {
        "tfidf"
    }

    fn score(
        &self,
        query: &str,
        candidates: &[Document],
    ) -> Result<Vec<ScoredDocument>, ScoreError> {
        Ok(self.rank(query, candidates))
    }
}

/// Ranks candidates against a query with the default TF-IDF scorer.
pub fn rank(query: &str, candidates: &[Document]) -> Vec<ScoredDocument> {
    TfIdfScorer::new().rank(query, candidates)
}
