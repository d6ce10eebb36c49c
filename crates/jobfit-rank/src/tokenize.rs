//! Text tokenization.
//!
//! Tokens are lowercase runs of `[a-z0-9+#.-]` at least two characters long that
//! are not stopwords. Symbols like `+`, `#` and `.` are kept so that terms such
//! as `c++`, `c#` and `node.js` survive as single tokens.

use crate::{StopwordSet, Stopwords};

/// Returns true if a lowercased character may appear inside a token.
fn is_token_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '+' | '#' | '.' | '-')
}

/// Splits text into normalized tokens.
///
/// Tokenization is pure and locale independent: the same text always yields
/// the same sequence of tokens.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Stopwords dropped from the output.
    stopwords: Stopwords,
}

impl Tokenizer {
    /// Creates a tokenizer with the built-in stopword list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tokenizer that drops the given stopword set.
    pub fn with_stopwords(set: StopwordSet) -> Self {
        Self {
            stopwords: Stopwords::with_set(set),
        }
    }

    /// Tokenizes text, returning tokens in encounter order.
    ///
    /// Empty or all-stopword input yields an empty vector.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized: String = text
            .to_lowercase()
            .chars()
            .map(|c| if is_token_char(c) { c } else { ' ' })
            .collect();

        normalized
            .split_whitespace()
            .filter(|t| t.len() > 1 && !self.stopwords.contains(t))
            .map(str::to_string)
            .collect()
    }
}

/// Tokenizes text with the built-in stopword list.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize(text)
}
