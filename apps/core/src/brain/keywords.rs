//! Keyword Extraction by word frequency.
//!
//! Extracts the most frequent tokens from a script. No stemming and no stopword list:
//! a token qualifies when it is at least three characters long, and tokens are ranked
//! by how often they occur. Ties keep the order in which tokens were first seen.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder returned when a text contains no qualifying token.
pub const FALLBACK_KEYWORD: &str = "주제";

/// Default minimum token length, counted in characters.
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Default number of keywords retained downstream.
pub const MAX_KEYWORDS: usize = 10;

/// Result of keyword extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordResult {
    /// The normalized keyword
    pub keyword: String,
    /// Raw frequency in the text
    pub frequency: usize,
}

/// Frequency-based keyword extractor
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    min_word_length: usize,
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create a new keyword extractor with default settings
    pub fn new() -> Self {
        Self::with_config(MIN_KEYWORD_CHARS, MAX_KEYWORDS)
    }

    /// Create a keyword extractor with custom configuration
    pub fn with_config(min_word_length: usize, max_keywords: usize) -> Self {
        Self {
            min_word_length,
            max_keywords,
        }
    }

    /// Word characters survive normalization; everything else becomes a separator.
    fn is_token_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || is_hangul_syllable(c)
    }

    /// Tokenize text into lowercased words of at least `min_word_length` characters
    fn tokenize<'a>(&self, lowered: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let min = self.min_word_length;
        lowered
            .split(|c: char| !Self::is_token_char(c))
            .filter(move |word| word.chars().count() >= min)
    }

    /// Count every qualifying token and rank by descending frequency.
    ///
    /// The ranking is stable: tokens with equal counts keep their first-seen order.
    /// Returns an empty vector when nothing qualifies.
    pub fn extract(&self, text: &str, top_k: Option<usize>) -> Vec<KeywordResult> {
        let max_results = top_k.unwrap_or(self.max_keywords);
        let lowered = text.to_lowercase();

        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut counted: Vec<KeywordResult> = Vec::new();

        for word in self.tokenize(&lowered) {
            match positions.get(word) {
                Some(&idx) => counted[idx].frequency += 1,
                None => {
                    positions.insert(word, counted.len());
                    counted.push(KeywordResult {
                        keyword: word.to_string(),
                        frequency: 1,
                    });
                }
            }
        }

        // sort_by is stable
        counted.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        counted.truncate(max_results);
        counted
    }

    /// Extract keywords as plain strings, never empty.
    ///
    /// When no token qualifies, a single [`FALLBACK_KEYWORD`] is returned instead.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        Self::or_fallback(&self.extract(text, None))
    }

    /// Plain strings from ranked results, or the single fallback when there are none.
    pub fn or_fallback(results: &[KeywordResult]) -> Vec<String> {
        if results.is_empty() {
            vec![FALLBACK_KEYWORD.to_string()]
        } else {
            results.iter().map(|k| k.keyword.clone()).collect()
        }
    }
}

/// Precomposed Hangul syllables, 가 (U+AC00) through 힣 (U+D7A3).
fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Convenience wrapper using the default extractor.
pub fn extract_keywords(text: &str) -> Vec<String> {
    KeywordExtractor::new().extract_keywords(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_ranking() {
        let extractor = KeywordExtractor::new();

        let keywords = extractor.extract("rust go rust python rust python", None);

        assert_eq!(keywords[0].keyword, "rust");
        assert_eq!(keywords[0].frequency, 3);
        assert_eq!(keywords[1].keyword, "python");
        assert_eq!(keywords[1].frequency, 2);
        // "go" is too short
        assert_eq!(keywords.len(), 2);
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let keywords = extract_keywords("delta alpha charlie bravo");
        assert_eq!(keywords, vec!["delta", "alpha", "charlie", "bravo"]);
    }

    #[test]
    fn test_hangul_tokens_survive() {
        let keywords = extract_keywords("다이어트! 다이어트? 운동법, 다이어트.");
        assert_eq!(keywords, vec!["다이어트", "운동법"]);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        let keywords = extract_keywords("state-of-the-art");
        assert_eq!(keywords, vec!["state", "the", "art"]);
    }

    #[test]
    fn test_lowercasing_merges_tokens() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor.extract("Rust RUST rust", None);
        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0].frequency, 3);
    }

    #[test]
    fn test_capped_at_ten() {
        let text = (0..25)
            .map(|i| format!("word{:02}", i))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(extract_keywords(&text).len(), MAX_KEYWORDS);
    }

    #[test]
    fn test_fallback_for_punctuation() {
        assert_eq!(extract_keywords("!!! ... ??? ---"), vec![FALLBACK_KEYWORD]);
    }

    #[test]
    fn test_fallback_for_short_words() {
        assert_eq!(extract_keywords("a bb 가 나다 ok"), vec![FALLBACK_KEYWORD]);
    }

    #[test]
    fn test_empty_text() {
        let extractor = KeywordExtractor::new();
        assert!(extractor.extract("", None).is_empty());
        assert_eq!(extractor.extract_keywords("   "), vec![FALLBACK_KEYWORD]);
    }

    #[test]
    fn test_non_hangul_letters_are_separators() {
        // Accented Latin letters are not word characters here.
        let keywords = extract_keywords("café résumé");
        assert_eq!(keywords, vec!["caf", "sum"]);
    }
}
