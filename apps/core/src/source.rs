//! Source script input guard.
//!
//! The engine itself never checks length. Callers build a [`SourceScript`] first, which
//! rejects empty and oversized input before anything reaches analysis.

use serde::Serialize;

use crate::error::AppError;

/// Maximum accepted script length, in characters
pub const MAX_SCRIPT_CHARS: usize = 20_000;

/// Character count as shown by the input counter
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Whether `text` exceeds [`MAX_SCRIPT_CHARS`]
pub fn over_limit(text: &str) -> bool {
    char_count(text) > MAX_SCRIPT_CHARS
}

/// A validated, trimmed script. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SourceScript(String);

impl SourceScript {
    /// Trim `raw` and check it against the input bounds.
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let text = raw.trim();

        if text.is_empty() {
            return Err(AppError::EmptyInput);
        }

        let length = char_count(text);
        if length > MAX_SCRIPT_CHARS {
            return Err(AppError::OversizeInput {
                length,
                max: MAX_SCRIPT_CHARS,
            });
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        char_count(&self.0)
    }
}

impl AsRef<str> for SourceScript {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(SourceScript::new(""), Err(AppError::EmptyInput)));
        assert!(matches!(SourceScript::new(" \n\t "), Err(AppError::EmptyInput)));
    }

    #[test]
    fn test_boundary_accepted() {
        let text = "가".repeat(MAX_SCRIPT_CHARS);
        let script = SourceScript::new(&text).unwrap();
        assert_eq!(script.char_count(), MAX_SCRIPT_CHARS);
    }

    #[test]
    fn test_one_over_boundary_rejected() {
        let text = "a".repeat(MAX_SCRIPT_CHARS + 1);
        match SourceScript::new(&text) {
            Err(AppError::OversizeInput { length, max }) => {
                assert_eq!(length, 20_001);
                assert_eq!(max, 20_000);
            }
            other => panic!("expected OversizeInput, got {:?}", other),
        }
        assert!(over_limit(&text));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 20,000 Hangul syllables are 60,000 bytes but still within bounds.
        assert!(!over_limit(&"한".repeat(MAX_SCRIPT_CHARS)));
    }

    #[test]
    fn test_trimmed() {
        let script = SourceScript::new("  대본 내용  ").unwrap();
        assert_eq!(script.as_str(), "대본 내용");
    }
}
