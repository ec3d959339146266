//! Category Classification using regex patterns.
//!
//! Detects which rhetorical categories a script belongs to. Every category owns one
//! alternation of Korean and English phrases and is tested independently, so a script
//! may match none, some, or all of them.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Rhetorical category of a source script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Step-by-step guidance (어떻게, 방법, how to, ...)
    HowTo,
    /// Problem and solution (문제, 해결, issue, ...)
    Problem,
    /// Narrative or case (이야기, 경험, story, ...)
    Story,
    /// Tips and know-how (팁, 노하우, ...)
    Tips,
    /// Review or evaluation (리뷰, 후기, ...)
    Review,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::HowTo,
        Category::Problem,
        Category::Story,
        Category::Tips,
        Category::Review,
    ];

    /// Returns a human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Category::HowTo => "howTo",
            Category::Problem => "problem",
            Category::Story => "story",
            Category::Tips => "tips",
            Category::Review => "review",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Category::HowTo => &*HOW_TO_PATTERN,
            Category::Problem => &*PROBLEM_PATTERN,
            Category::Story => &*STORY_PATTERN,
            Category::Tips => &*TIPS_PATTERN,
            Category::Review => &*REVIEW_PATTERN,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Compile patterns once at startup
// NOTE: the patterns are literals, so a failed compile is a programming error
static HOW_TO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"어떻게|방법|how to|가이드|단계|절차").expect("Invalid regex: how-to pattern")
});

static PROBLEM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"문제|해결|challenge|issue|고민|어려움").expect("Invalid regex: problem pattern")
});

static STORY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"이야기|스토리|경험|사례|story|케이스").expect("Invalid regex: story pattern")
});

static TIPS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"팁|tip|노하우|비법|꿀팁").expect("Invalid regex: tips pattern")
});

static REVIEW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"리뷰|review|평가|분석|후기").expect("Invalid regex: review pattern")
});

/// Independent boolean signals, one per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFlags {
    pub how_to: bool,
    pub problem: bool,
    pub story: bool,
    pub tips: bool,
    pub review: bool,
}

impl CategoryFlags {
    /// Whether the flag for `category` is set
    pub fn contains(&self, category: Category) -> bool {
        match category {
            Category::HowTo => self.how_to,
            Category::Problem => self.problem,
            Category::Story => self.story,
            Category::Tips => self.tips,
            Category::Review => self.review,
        }
    }

    fn set(&mut self, category: Category) {
        match category {
            Category::HowTo => self.how_to = true,
            Category::Problem => self.problem = true,
            Category::Story => self.story = true,
            Category::Tips => self.tips = true,
            Category::Review => self.review = true,
        }
    }

    /// Categories whose flag is set, in declaration order
    pub fn matched(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.matched().is_empty()
    }
}

/// Category classifier using regex patterns
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryClassifier;

impl CategoryClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a script. Total and pure: any text, including an empty one, yields flags.
    pub fn classify(&self, text: &str) -> CategoryFlags {
        let lowered = text.to_lowercase();
        let mut flags = CategoryFlags::default();

        for category in Category::ALL {
            if category.pattern().is_match(&lowered) {
                flags.set(category);
            }
        }

        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_how_to_detection() {
        let classifier = CategoryClassifier::new();

        assert!(classifier.classify("다이어트 하는 방법").how_to);
        assert!(classifier.classify("How To cook rice").how_to);
        assert!(classifier.classify("초보자 가이드").how_to);
    }

    #[test]
    fn test_flags_are_independent() {
        let classifier = CategoryClassifier::new();

        let flags = classifier.classify("이 방법으로 문제를 풀었다");
        assert!(flags.how_to);
        assert!(flags.problem);
        assert!(!flags.story);
        assert!(!flags.tips);
        assert!(!flags.review);
    }

    #[test]
    fn test_all_categories() {
        let classifier = CategoryClassifier::new();

        let flags = classifier.classify("방법 문제 이야기 꿀팁 후기");
        assert_eq!(flags.matched(), Category::ALL.to_vec());
    }

    #[test]
    fn test_no_category() {
        let classifier = CategoryClassifier::new();

        let flags = classifier.classify("!!! ???");
        assert!(flags.is_empty());
        assert_eq!(flags, CategoryFlags::default());

        assert!(classifier.classify("").is_empty());
    }

    #[test]
    fn test_english_is_case_insensitive() {
        let classifier = CategoryClassifier::new();

        let flags = classifier.classify("My STORY and a product REVIEW");
        assert!(flags.story);
        assert!(flags.review);
    }

    #[test]
    fn test_substring_matching() {
        // No word boundaries: "tip" matches inside "multiple".
        let classifier = CategoryClassifier::new();
        assert!(classifier.classify("multiple").tips);
    }

    #[test]
    fn test_flags_serialize_camel_case() {
        let flags = CategoryFlags {
            how_to: true,
            ..Default::default()
        };
        let json = serde_json::to_value(flags).unwrap();
        assert_eq!(json["howTo"], true);
        assert_eq!(json["review"], false);
    }
}
