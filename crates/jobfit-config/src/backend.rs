//! Scoring backend selection.

use std::{fmt, str};

use serde::{Deserialize, Serialize};

/// Which scorer ranks the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// TF-IDF cosine similarity over the query and catalog.
    #[default]
    #[serde(alias = "tf-idf", alias = "tf_idf")]
    TfIdf,
    /// Dense embedding similarity.
    #[serde(alias = "embeddings")]
    Embedding,
}

impl Backend {
    /// Returns a brief description of the backend.
    pub fn description(&self) -> &'static str {
        match self {
            Self::TfIdf => "TF-IDF cosine similarity, deterministic",
            Self::Embedding => "Hashed bag-of-words embeddings, dot-product similarity",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TfIdf => write!(f, "tfidf"),
            Self::Embedding => write!(f, "embedding"),
        }
    }
}

impl str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tfidf" | "tf-idf" | "tf_idf" => Ok(Self::TfIdf),
            "embedding" | "embeddings" => Ok(Self::Embedding),
            _ => Err(format!(
                "unknown backend '{s}', expected one of: tfidf, embedding"
            )),
        }
    }
}
