// Multilingual text preprocessing.
//
// Intranet articles arrive in a mix of English, German, French, and Italian,
// so the stopword set is the union of all four lists from the stop-words
// crate. Tokens of four characters or fewer and purely numeric tokens are
// dropped as well; they carry no topical signal.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Normalizes raw article text into a filtered token sequence.
///
/// Construct once per run and reuse: the four stopword lists are loaded at
/// construction and never change afterwards.
pub struct Preprocessor {
    stopwords: HashSet<String>,
}

impl Preprocessor {
    /// Build a preprocessor with the combined EN/DE/FR/IT stopword set.
    pub fn new() -> Self {
        let mut stopwords = HashSet::new();
        for language in [
            LANGUAGE::English,
            LANGUAGE::German,
            LANGUAGE::French,
            LANGUAGE::Italian,
        ] {
            stopwords.extend(get(language));
        }
        Self { stopwords }
    }

    /// Lowercase, strip punctuation, split on whitespace, filter noise.
    ///
    /// Punctuation is replaced char-wise rather than with an ASCII regex so
    /// accented characters and umlauts survive ("für" stays one token).
    /// Empty input yields an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|t| t.chars().count() > 3)
            .filter(|t| !t.chars().all(char::is_numeric))
            .filter(|t| !self.stopwords.contains(*t))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
