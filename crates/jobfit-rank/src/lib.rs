//! Document similarity ranking for jobfit.
//!
//! Ranks candidate documents (job descriptions) by how closely they match a
//! query document (a CV). Two interchangeable backends implement [`Scorer`]:
//!
//! 1. **TF-IDF** ([`TfIdfScorer`]): bag-of-words vectors weighted by inverse
//!    document frequency over the query plus candidates, compared by cosine
//!    similarity. Deterministic and dependency free.
//! 2. **Embedding** ([`EmbeddingScorer`]): dense vectors from an [`Embedder`]
//!    handle, compared by normalized dot product.
//!
//! Both return every candidate once, paired with an integer score in `[0, 100]`,
//! sorted by score descending and then by title.
//!
//! ## Scoring
//!
//! For the TF-IDF backend each token is weighted `tf × ln((N + 1) / (df + 0.5))`
//! where `N` counts the query and all candidates of the current call. Cosine
//! similarity is clamped to `[0, 1]`, scaled to `[0, 100]` and rounded half away
//! from zero.

#![warn(missing_docs)]

mod corpus;
mod document;
mod embedding;
mod error;
mod rank;
mod scorer;
mod stopwords;
mod tokenize;
pub mod vector;

pub use corpus::{Corpus, DocumentFrequencies, TermFrequencies};
pub use document::{Document, ScoredDocument};
pub use embedding::{Embedder, EmbeddingScorer, HashingEmbedder, embedding_score, l2_normalize};
pub use error::{EmbedError, ScoreError};
pub use rank::{TfIdfScorer, rank};
pub use scorer::Scorer;
pub use stopwords::{StopwordSet, Stopwords};
pub use tokenize::{Tokenizer, tokenize};
pub use vector::{WeightedVector, cosine_similarity, to_score};
