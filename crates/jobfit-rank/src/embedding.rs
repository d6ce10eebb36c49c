//! Embedding-based scoring.
//!
//! An [`EmbeddingScorer`] owns an [`Embedder`] handle that the caller builds
//! once and reuses across calls; there is no process-wide model cache. Vectors
//! are L2-normalized and compared by dot product, and the similarity range
//! `[-1, 1]` is mapped linearly onto `[0, 100]`.
//!
//! [`HashingEmbedder`] is the bundled embedder. It hashes tokens into a fixed
//! number of signed buckets, which gives a deterministic bag-of-words vector
//! without any model files. Neural models plug in by implementing [`Embedder`].

use std::hash::Hasher;

use siphasher::sip::SipHasher13;
use tracing::debug;

use crate::{
    Document, EmbedError, ScoreError, ScoredDocument, Scorer, StopwordSet, Tokenizer,
    document::sort_best_first, vector::MAX_SCORE,
};

/// Converts text into a dense vector.
pub trait Embedder: Send + Sync {
    /// Identifier of the underlying model.
    fn model_id(&self) -> &str;

    /// Embeds one text.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;
}

/// Feature-hashing bag-of-words embedder.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    /// Number of output buckets.
    dimensions: usize,
    /// Tokenizer producing the hashed features.
    tokenizer: Tokenizer,
}

impl HashingEmbedder {
    /// Creates an embedder with the given number of dimensions.
    pub fn new(dimensions: usize) -> Result<Self, EmbedError> {
        Self::with_stopwords(dimensions, StopwordSet::Builtin)
    }

    /// Creates an embedder whose tokenizer drops the given stopword set.
    pub fn with_stopwords(dimensions: usize, set: StopwordSet) -> Result<Self, EmbedError> {
        if dimensions == 0 {
            return Err(EmbedError::ZeroDimensions);
        }
        Ok(Self {
            dimensions,
            tokenizer: Tokenizer::with_stopwords(set),
        })
    }
}

impl Embedder for HashingEmbedder {
    fn model_id(&self) -> &str {
        "hashing-bow"
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let mut vector = vec![0.0f32; self.dimensions];
        for token in self.tokenizer.tokenize(text) {
            let mut hasher = SipHasher13::new_with_keys(0, 0);
            hasher.write(token.as_bytes());
            let hash = hasher.finish();
            // Top bit picks the sign
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            vector[(hash % self.dimensions as u64) as usize] += sign;
        }
        Ok(vector)
    }
}

/// Scales a vector to unit length. The zero vector is returned unchanged.
pub fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}

/// Maps a cosine similarity in `[-1, 1]` to a score in `[0, 100]`.
///
/// Orthogonal vectors (including the zero vector) score 50.
pub fn embedding_score(similarity: f64) -> u8 {
    if similarity.is_nan() {
        return 0;
    }
    let scaled = ((similarity + 1.0) / 2.0 * f64::from(MAX_SCORE)).round();
    scaled.clamp(0.0, f64::from(MAX_SCORE)) as u8
}

/// Scores candidates by embedding similarity.
#[derive(Debug, Clone)]
pub struct EmbeddingScorer<E> {
    /// Embedder handle, acquired once by the caller.
    embedder: E,
}

impl<E: Embedder> EmbeddingScorer<E> {
    /// Wraps an embedder.
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }

    /// Embeds and normalizes one text, attributing failures to `target`.
    fn embed_normalized(
        &self,
        text: &str,
        target: impl FnOnce() -> String,
    ) -> Result<Vec<f32>, ScoreError> {
        let mut vector = self
            .embedder
            .embed(text)
            .map_err(|source| ScoreError::Embedding {
                target: target(),
                source,
            })?;
        l2_normalize(&mut vector);
        Ok(vector)
    }
}

impl<E: Embedder> Scorer for EmbeddingScorer<E> {
    fn name(&self) -> &'static str {
        "embedding"
    }

    fn score(
        &self,
        query: &str,
        candidates: &[Document],
    ) -> Result<Vec<ScoredDocument>, ScoreError> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let query_vec = self.embed_normalized(query, || "query".to_string())?;
        debug!(
            model = self.embedder.model_id(),
            dimensions = query_vec.len(),
            candidates = candidates.len(),
            "embedding candidates"
        );

        let mut results = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let vec = self.embed_normalized(&candidate.text, || {
                format!("candidate '{}'", candidate.id)
            })?;
            if vec.len() != query_vec.len() {
                return Err(ScoreError::DimensionMismatch {
                    id: candidate.id.clone(),
                    query: query_vec.len(),
                    candidate: vec.len(),
                });
            }
            let similarity: f32 = query_vec.iter().zip(&vec).map(|(a, b)| a * b).sum();
            results.push(ScoredDocument {
                document: candidate.clone(),
                score: embedding_score(f64::from(similarity)),
            });
        }

        sort_best_first(&mut results);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Embedder returning a fixed vector per text, for exercising the scorer.
    struct TableEmbedder {
        /// `(text, vector)` pairs.
        table: Vec<(&'static str, Vec<f32>)>,
    }

    impl Embedder for TableEmbedder {
        fn model_id(&self) -> &str {
            "table"
        }

        fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
            self.table
                .iter()
                .find(|(t, _)| *t == text)
                .map(|(_, v)| v.clone())
                .ok_or_else(|| EmbedError::Model {
                    model: "table".to_string(),
                    message: format!("no vector for '{text}'"),
                })
        }
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(
            HashingEmbedder::new(0),
            Err(EmbedError::ZeroDimensions)
        ));
    }

    #[test]
    fn hashing_embedder_is_deterministic() {
        let embedder = HashingEmbedder::new(64).unwrap();
        let a = embedder.embed("rust async networking").unwrap();
        let b = embedder.embed("rust async networking").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.iter().any(|v| *v != 0.0));
    }

    #[test]
    fn hashing_embedder_ignores_stopwords() {
        let embedder = HashingEmbedder::new(64).unwrap();
        assert!(embedder.embed("the and of").unwrap().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn normalize_produces_unit_vector() {
        let mut v = vec![3.0, 4.0];
        l2_normalize(&mut v);
        assert!((v[0] - 0.6).abs() < 1e-6);
        assert!((v[1] - 0.8).abs() < 1e-6);

        let mut zero = vec![0.0, 0.0];
        l2_normalize(&mut zero);
        assert_eq!(zero, vec![0.0, 0.0]);
    }

    #[test]
    fn embedding_score_maps_range() {
        assert_eq!(embedding_score(-1.0), 0);
        assert_eq!(embedding_score(0.0), 50);
        assert_eq!(embedding_score(1.0), 100);
        assert_eq!(embedding_score(1.5), 100);
        assert_eq!(embedding_score(f64::NAN), 0);
    }

    #[test]
    fn scores_and_orders_candidates() {
        let embedder = TableEmbedder {
            table: vec![
                ("query", vec![1.0, 0.0]),
                ("same", vec![2.0, 0.0]),
                ("opposite", vec![-1.0, 0.0]),
                ("orthogonal", vec![0.0, 5.0]),
            ],
        };
        let scorer = EmbeddingScorer::new(embedder);
        let candidates = vec![
            Document::new("o", "Opposite", "opposite"),
            Document::new("x", "Orthogonal", "orthogonal"),
            Document::new("s", "Same", "same"),
        ];
        let results = scorer.score("query", &candidates).unwrap();
        let pairs: Vec<(&str, u8)> = results.iter().map(|r| (r.id(), r.score)).collect();
        assert_eq!(pairs, vec![("s", 100), ("x", 50), ("o", 0)]);
    }

    #[test]
    fn dimension_mismatch_is_reported() {
        let embedder = TableEmbedder {
            table: vec![("query", vec![1.0, 0.0]), ("short", vec![1.0])],
        };
        let scorer = EmbeddingScorer::new(embedder);
        let err = scorer
            .score("query", &[Document::new("j", "J", "short")])
            .unwrap_err();
        assert!(matches!(err, ScoreError::DimensionMismatch { .. }));
    }

    #[test]
    fn embedder_failure_names_candidate() {
        let embedder = TableEmbedder {
            table: vec![("query", vec![1.0])],
        };
        let scorer = EmbeddingScorer::new(embedder);
        let err = scorer
            .score("query", &[Document::new("missing", "M", "unknown")])
            .unwrap_err();
        assert!(err.to_string().contains("candidate 'missing'"));
    }

    #[test]
    fn empty_candidates_skip_embedding() {
        let scorer = EmbeddingScorer::new(TableEmbedder { table: vec![] });
        assert!(scorer.score("anything", &[]).unwrap().is_empty());
    }

    #[test]
    fn hashing_scorer_prefers_overlap() {
        let scorer = EmbeddingScorer::new(HashingEmbedder::new(1024).unwrap());
        let candidates = vec![
            Document::new("b", "Data", "python pandas machine learning"),
            Document::new("a", "Full Stack", "react node sql"),
        ];
        let results = scorer.score("react node sql python", &candidates).unwrap();
        assert_eq!(results[0].id(), "a");
        assert!(results[0].score > results[1].score);
    }
}
