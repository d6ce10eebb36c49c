//! Stopword filtering for tokenization.
//!
//! The built-in list covers common English function words: articles,
//! conjunctions, pronouns and auxiliary verbs. The extended set adds the ISO
//! English list from the `stop-words` crate on top of it.

use std::collections::HashSet;

use stop_words::LANGUAGE;

/// Which stopword list a [`Stopwords`] filter is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwordSet {
    /// Only the built-in function-word list.
    #[default]
    Builtin,
    /// The built-in list plus the ISO English stopwords.
    Extended,
}

/// A stopword filter.
///
/// Uses a `HashSet` for O(1) lookup. All words are stored lowercase; callers are
/// expected to pass already-lowercased tokens.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lowercase stopwords.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates a filter with the built-in stopword list.
    pub fn new() -> Self {
        Self::with_set(StopwordSet::Builtin)
    }

    /// Creates a filter for the given stopword set.
    pub fn with_set(set: StopwordSet) -> Self {
        let mut words: HashSet<String> = HashSet::new();

        let mut add_words = |slice: &[&str]| {
            for word in slice {
                words.insert(word.to_lowercase());
            }
        };

        add_words(BUILTIN_STOPWORDS);
        if set == StopwordSet::Extended {
            add_words(stop_words::get(LANGUAGE::English));
        }

        Self { words }
    }

    /// Checks if a token is a stopword.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Returns the total number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// English function words dropped by every tokenizer.
static BUILTIN_STOPWORDS: &[&str] = &[
    // Articles and conjunctions
    "a", "an", "the", "and", "or", "but", "if", "then", "else",
    // Prepositions
    "for", "to", "of", "in", "on", "at", "by", "with", "from",
    // Forms of "to be"
    "is", "are", "was", "were", "be", "being", "been", "as",
    // Demonstratives and pronouns
    "it", "this", "that", "these", "those", "we", "you", "they", "i", "me", "my", "our", "your",
    "their", "he", "she", "his", "her", "them",
    // Auxiliaries
    "do", "does", "did", "have", "has", "had",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_contains_function_words() {
        let stopwords = Stopwords::new();
        for word in ["the", "and", "is", "your", "had", "i"] {
            assert!(stopwords.contains(word), "expected '{word}' to be a stopword");
        }
    }

    #[test]
    fn builtin_keeps_content_words() {
        let stopwords = Stopwords::new();
        for word in ["react", "python", "sql", "c++", "node.js"] {
            assert!(!stopwords.contains(word), "'{word}' should not be a stopword");
        }
    }

    #[test]
    fn builtin_list_size() {
        assert_eq!(Stopwords::new().len(), 51);
    }

    #[test]
    fn extended_is_superset_of_builtin() {
        let builtin = Stopwords::new();
        let extended = Stopwords::with_set(StopwordSet::Extended);
        assert!(extended.len() > builtin.len());
        for word in BUILTIN_STOPWORDS {
            assert!(extended.contains(word));
        }
    }

    #[test]
    fn default_is_builtin() {
        assert_eq!(StopwordSet::default(), StopwordSet::Builtin);
        assert_eq!(Stopwords::default().len(), Stopwords::new().len());
    }
}
