//! Scorer construction from configuration.

use jobfit_config::{Backend, ScorerSettings};
use jobfit_rank::{EmbedError, EmbeddingScorer, HashingEmbedder, Scorer, StopwordSet, TfIdfScorer};
use tracing::info;

/// Builds the scorer selected by `settings`, overriding the backend if given.
///
/// The embedder is created here once and owned by the returned scorer.
pub fn build_scorer(
    settings: &ScorerSettings,
    backend: Option<Backend>,
) -> Result<Box<dyn Scorer>, EmbedError> {
    let backend = backend.unwrap_or(settings.backend);
    let stopwords = if settings.extended_stopwords {
        StopwordSet::Extended
    } else {
        StopwordSet::Builtin
    };

    let scorer: Box<dyn Scorer> = match backend {
        Backend::TfIdf => Box::new(TfIdfScorer::with_stopwords(stopwords)),
        Backend::Embedding => {
            let embedder = HashingEmbedder::with_stopwords(settings.dimensions, stopwords)?;
            Box::new(EmbeddingScorer::new(embedder))
        }
    };
    info!(backend = scorer.name(), ?stopwords, "selected scorer");
    Ok(scorer)
}
