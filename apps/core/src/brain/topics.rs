//! Topic synthesis from keywords and category flags.
//!
//! Rules run in a fixed order and are never re-sorted, so a suggestion's id always names
//! the rule that produced it:
//!
//! | id | condition       | title                              |
//! |----|-----------------|------------------------------------|
//! | 1  | `how_to`        | `{k0}를 활용한 실전 가이드`         |
//! | 2  | `problem`       | `{k0}를 해결하는 3가지 방법`        |
//! | 3  | `story`         | `{k0}에서 배우는 핵심 교훈`         |
//! | 4  | always          | `{k0}의 숨겨진 진실`                |
//! | 5  | always          | `{k1}로 시작하는 변화`              |
//!
//! `tips` and `review` have no rule yet.

use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryFlags};

/// Upper bound on suggestions per batch
pub const MAX_TOPICS: usize = 5;

/// A topic the user can pick for script generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSuggestion {
    /// Rule id, unique within one batch (1..=5)
    pub id: u8,
    pub title: String,
    pub description: String,
}

/// Which keyword slot a rule interpolates
#[derive(Debug, Clone, Copy)]
enum Slot {
    Primary,
    Secondary,
}

/// A single synthesis rule
struct TopicRule {
    id: u8,
    /// `None` means the rule always fires
    requires: Option<Category>,
    slot: Slot,
    fallback: &'static str,
    suffix: &'static str,
    description: &'static str,
}

const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        id: 1,
        requires: Some(Category::HowTo),
        slot: Slot::Primary,
        fallback: "주제",
        suffix: "를 활용한 실전 가이드",
        description: "초보자도 쉽게 따라할 수 있는 단계별 실행 방법을 중심으로 재구성",
    },
    TopicRule {
        id: 2,
        requires: Some(Category::Problem),
        slot: Slot::Primary,
        fallback: "이 문제",
        suffix: "를 해결하는 3가지 방법",
        description: "문제 상황과 해결책에 초점을 맞춘 솔루션 중심 콘텐츠",
    },
    TopicRule {
        id: 3,
        requires: Some(Category::Story),
        slot: Slot::Primary,
        fallback: "이야기",
        suffix: "에서 배우는 핵심 교훈",
        description: "스토리텔링을 활용해 교훈과 인사이트를 전달하는 내러티브 방식",
    },
    TopicRule {
        id: 4,
        requires: None,
        slot: Slot::Primary,
        fallback: "주제",
        suffix: "의 숨겨진 진실",
        description: "일반적으로 알려지지 않은 심층 정보와 새로운 관점 제시",
    },
    TopicRule {
        id: 5,
        requires: None,
        slot: Slot::Secondary,
        fallback: "관련 주제",
        suffix: "로 시작하는 변화",
        description: "실제 적용 가능한 액션 플랜과 구체적인 실행 전략 제공",
    },
];

impl TopicRule {
    fn applies(&self, flags: &CategoryFlags) -> bool {
        self.requires.map_or(true, |category| flags.contains(category))
    }

    fn build(&self, keywords: &[String]) -> TopicSuggestion {
        let index = match self.slot {
            Slot::Primary => 0,
            Slot::Secondary => 1,
        };
        let subject = keywords
            .get(index)
            .map(String::as_str)
            .filter(|k| !k.is_empty())
            .unwrap_or(self.fallback);

        TopicSuggestion {
            id: self.id,
            title: format!("{}{}", subject, self.suffix),
            description: self.description.to_string(),
        }
    }
}

/// Turns keywords and category flags into topic suggestions
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicSynthesizer;

impl TopicSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Build the suggestion batch: between 2 and [`MAX_TOPICS`] entries, in rule order.
    pub fn synthesize(&self, keywords: &[String], flags: &CategoryFlags) -> Vec<TopicSuggestion> {
        TOPIC_RULES
            .iter()
            .filter(|rule| rule.applies(flags))
            .map(|rule| rule.build(keywords))
            .take(MAX_TOPICS)
            .collect()
    }
}
