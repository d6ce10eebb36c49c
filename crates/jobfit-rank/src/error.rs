//! Error types for scoring backends.
//!
//! The TF-IDF backend never fails; these errors come from embedding backends.

use thiserror::Error;

/// Errors raised by an [`Embedder`](crate::Embedder).
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The embedder was configured with zero output dimensions.
    #[error("embedding dimensions must be greater than zero")]
    ZeroDimensions,

    /// The underlying model failed to produce a vector.
    #[error("model '{model}' failed to embed text: {message}")]
    Model {
        /// Identifier of the model that failed.
        model: String,
        /// Description of the failure.
        message: String,
    },
}

/// Errors raised by a [`Scorer`](crate::Scorer).
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The query or a candidate could not be embedded.
    #[error("failed to embed {target}: {source}")]
    Embedding {
        /// What was being embedded (`query` or `candidate '<id>'`).
        target: String,
        /// Underlying embedder error.
        source: EmbedError,
    },

    /// A candidate vector has a different length from the query vector.
    #[error(
        "embedding dimension mismatch: query has {query}, candidate '{id}' has {candidate}"
    )]
    DimensionMismatch {
        /// Identifier of the offending candidate.
        id: String,
        /// Query vector length.
        query: usize,
        /// Candidate vector length.
        candidate: usize,
    },
}
