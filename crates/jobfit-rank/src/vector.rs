//! TF-IDF weighting, cosine similarity and score mapping.

use std::collections::BTreeMap;

use crate::{DocumentFrequencies, TermFrequencies};

/// Highest score a candidate can receive.
pub const MAX_SCORE: u8 = 100;

/// Inverse document frequency: `ln((n + 1) / (df + 0.5))`.
///
/// Always positive for `df <= n`, which holds for every token drawn from the
/// corpus the table was built over.
pub fn idf(df: u32, n: usize) -> f64 {
    ((n as f64 + 1.0) / (f64::from(df) + 0.5)).ln()
}

/// A sparse TF-IDF weighted term vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedVector {
    /// Token to weight.
    weights: BTreeMap<String, f64>,
}

impl WeightedVector {
    /// Returns the weight of a token, if present.
    pub fn get(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }

    /// Iterates over `(token, weight)` pairs in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(t, &w)| (t.as_str(), w))
    }

    /// Number of non-zero dimensions.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true for the zero vector.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }
}

impl FromIterator<(String, f64)> for WeightedVector {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

/// Weights a term frequency table: `tf * idf(df, n)` per token.
///
/// A token missing from `df` is treated as appearing in one document.
pub fn weight(tf: &TermFrequencies, df: &DocumentFrequencies, n: usize) -> WeightedVector {
    tf.iter()
        .map(|(token, count)| {
            let dfi = df.get(token).max(1);
            (token.to_string(), f64::from(count) * idf(dfi, n))
        })
        .collect()
}

/// Cosine similarity between two sparse vectors.
///
/// The dot product walks the smaller vector and looks each term up in the
/// larger one. A zero norm makes the denominator 1, so a zero vector has
/// similarity 0 with anything.
pub fn cosine_similarity(a: &WeightedVector, b: &WeightedVector) -> f64 {
    let mut denominator = a.norm() * b.norm();
    if denominator == 0.0 {
        denominator = 1.0;
    }

    let (smaller, larger) = if a.len() < b.len() { (a, b) } else { (b, a) };
    let dot: f64 = smaller
        .iter()
        .filter_map(|(token, w)| larger.get(token).map(|u| w * u))
        .sum();

    dot / denominator
}

/// Maps a similarity to an integer score in `[0, 100]`.
///
/// The similarity is clamped to `[0, 1]`, scaled by 100 and rounded half away
/// from zero. NaN maps to 0.
pub fn to_score(similarity: f64) -> u8 {
    if similarity.is_nan() {
        return 0;
    }
    let scaled = (similarity.clamp(0.0, 1.0) * f64::from(MAX_SCORE)).round();
    scaled as u8
}
