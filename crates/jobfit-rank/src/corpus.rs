//! Term and document frequency tables for a single scoring call.
//!
//! A [`Corpus`] is built from the query followed by every candidate text and is
//! discarded once the call finishes. Nothing here is cached across calls.

use std::collections::{BTreeMap, HashMap};

use crate::Tokenizer;

/// Token occurrence counts within one document.
///
/// Backed by an ordered map so that iteration, and therefore floating point
/// summation, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequencies {
    /// Token to occurrence count.
    counts: BTreeMap<String, u32>,
}

impl TermFrequencies {
    /// Counts occurrences of each token.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts = BTreeMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Returns the count for a token, or 0 if absent.
    pub fn get(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Iterates over `(token, count)` pairs in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if the document produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Number of documents containing each token at least once.
#[derive(Debug, Clone, Default)]
pub struct DocumentFrequencies {
    /// Token to document count.
    counts: HashMap<String, u32>,
}

impl DocumentFrequencies {
    /// Returns the document frequency of a token, or 0 if no document has it.
    pub fn get(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens across the corpus.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no document produced any token.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Per-call corpus: one term frequency table per text plus shared document
/// frequencies.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Term frequencies, in input order.
    documents: Vec<TermFrequencies>,
    /// Document frequencies over all inputs.
    document_frequencies: DocumentFrequencies,
}

impl Corpus {
    /// Builds the corpus, tokenizing each text exactly once.
    ///
    /// Document frequency counts distinct documents: a token repeated within one
    /// text contributes 1.
    pub fn build<'a, I>(tokenizer: &Tokenizer, texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut documents = Vec::new();
        let mut df: HashMap<String, u32> = HashMap::new();

        for text in texts {
            let tf = TermFrequencies::from_tokens(tokenizer.tokenize(text));
            // Each key appears once per document, so this counts documents
            for (token, _) in tf.iter() {
                *df.entry(token.to_string()).or_insert(0) += 1;
            }
            documents.push(tf);
        }

        Self {
            documents,
            document_frequencies: DocumentFrequencies { counts: df },
        }
    }

    /// Corpus size N.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Term frequencies for the document at `index` (input order).
    pub fn document(&self, index: usize) -> Option<&TermFrequencies> {
        self.documents.get(index)
    }

    /// Term frequencies for every document, in input order.
    pub fn documents(&self) -> &[TermFrequencies] {
        &self.documents
    }

    /// Shared document frequency table.
    pub fn document_frequencies(&self) -> &DocumentFrequencies {
        &self.document_frequencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(texts: &[&str]) -> Corpus {
        Corpus::build(&Tokenizer::new(), texts.iter().copied())
    }

    #[test]
    fn term_frequencies_count_occurrences() {
        let tf = TermFrequencies::from_tokens(
            ["sql", "rust", "sql"].into_iter().map(String::from),
        );
        assert_eq!(tf.get("sql"), 2);
        assert_eq!(tf.get("rust"), 1);
        assert_eq!(tf.get("go"), 0);
        assert_eq!(tf.len(), 2);
    }

    #[test]
    fn document_frequency_counts_documents_not_occurrences() {
        let corpus = build(&["sql sql sql sql sql", "sql python", "python"]);
        let df = corpus.document_frequencies();
        assert_eq!(df.get("sql"), 2);
        assert_eq!(df.get("python"), 2);
        assert_eq!(df.get("java"), 0);
        assert_eq!(df.len(), 2);
    }

    #[test]
    fn preserves_input_order() {
        let corpus = build(&["query text", "alpha", "beta"]);
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.document(1).unwrap().get("alpha"), 1);
        assert_eq!(corpus.document(2).unwrap().get("beta"), 1);
        assert!(corpus.document(3).is_none());
    }

    #[test]
    fn every_token_has_positive_document_frequency() {
        let corpus = build(&["react node", "node sql", "the and"]);
        for doc in corpus.documents() {
            for (token, _) in doc.iter() {
                assert!(corpus.document_frequencies().get(token) >= 1);
            }
        }
    }

    #[test]
    fn empty_texts_yield_empty_tables() {
        let corpus = build(&["", "the a"]);
        assert_eq!(corpus.len(), 2);
        assert!(corpus.documents().iter().all(TermFrequencies::is_empty));
        assert!(corpus.document_frequencies().is_empty());
    }
}
