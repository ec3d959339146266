//! Script Template Engine.
//!
//! Renders a new script for a chosen topic as one plain-text document with six fixed
//! sections. The shape never changes; only the topic strings and the main keyword of the
//! original script are interpolated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

use super::keywords::{KeywordExtractor, FALLBACK_KEYWORD};
use super::topics::TopicSuggestion;

/// The six sections of a generated script, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hook,
    Problem,
    Solution,
    CaseStudy,
    Recap,
    CallToAction,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hook,
        Section::Problem,
        Section::Solution,
        Section::CaseStudy,
        Section::Recap,
        Section::CallToAction,
    ];

    /// Literal heading line that opens the section
    pub fn marker(&self) -> &'static str {
        match self {
            Section::Hook => "## 🎯 후킹 (Hook)",
            Section::Problem => "## 📌 문제 정의 (Problem)",
            Section::Solution => "## 💡 해결책 & 핵심 포인트 (Solution)",
            Section::CaseStudy => "## 🔍 사례 & 실전 적용 (Case Study)",
            Section::Recap => "## 📝 핵심 정리 (Recap)",
            Section::CallToAction => "## 🚀 행동 촉구 (Call-to-Action)",
        }
    }
}

/// A rendered script. Immutable; a new generation replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedScript(String);

impl GeneratedScript {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Body text of one section, without its marker line
    pub fn section(&self, section: Section) -> Option<&str> {
        let start = self.0.find(section.marker())? + section.marker().len();
        let rest = &self.0[start..];
        let end = Section::ALL
            .iter()
            .filter_map(|s| rest.find(s.marker()))
            .min()
            .unwrap_or(rest.len());
        Some(rest[..end].trim())
    }

    pub fn has_all_sections(&self) -> bool {
        Section::ALL.iter().all(|s| self.0.contains(s.marker()))
    }
}

impl fmt::Display for GeneratedScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeneratedScript {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Renders scripts from the fixed six-section template
#[derive(Debug, Clone, Default)]
pub struct ScriptTemplate {
    keyword_extractor: KeywordExtractor,
}

impl ScriptTemplate {
    pub fn new() -> Self {
        Self {
            keyword_extractor: KeywordExtractor::new(),
        }
    }

    /// Render a script for `topic`.
    ///
    /// Keywords are recomputed from `original_script` on every call; pass the same text
    /// that produced the topic to keep them consistent.
    pub fn render(&self, topic: &TopicSuggestion, original_script: &str) -> GeneratedScript {
        let keywords = self.keyword_extractor.extract_keywords(original_script);
        let main_keyword = keywords
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_KEYWORD);

        let mut doc = String::new();
        let _ = writeln!(doc, "# {}", topic.title);

        for section in Section::ALL {
            let _ = write!(doc, "\n{}\n{}", section.marker(), section_body(section, topic, main_keyword));
        }

        GeneratedScript(doc)
    }
}

fn section_body(section: Section, topic: &TopicSuggestion, keyword: &str) -> String {
    match section {
        Section::Hook => format!(
            "안녕하세요! 오늘은 {keyword}에 대해 이야기해보려고 합니다.\n\
             이 영상을 끝까지 보시면, {description}\n\
             \n\
             여러분도 이런 고민 해보신 적 있으신가요?\n\
             지금부터 그 해답을 함께 찾아보겠습니다.\n",
            description = topic.description,
        ),
        Section::Problem => format!(
            "많은 분들이 {keyword}에 대해 이런 어려움을 겪고 계십니다:\n\
             • 어디서부터 시작해야 할지 모르겠다\n\
             • 정보는 많은데 실제로 적용하기 어렵다\n\
             • 시행착오를 겪으며 시간을 낭비하고 있다\n\
             \n\
             이런 문제들은 사실 근본적인 이해 부족에서 비롯됩니다.\n"
        ),
        Section::Solution => format!(
            "그래서 저는 다음 3가지 핵심 원칙을 제안합니다:\n\
             \n\
             **1. 첫 번째 핵심 원칙**\n\
             {keyword}의 기본 원리를 이해하는 것이 가장 중요합니다.\n\
             복잡해 보이지만, 핵심은 생각보다 단순합니다.\n\
             \n\
             **2. 두 번째 핵심 원칙**\n\
             이론보다 실천이 중요합니다.\n\
             작은 것부터 시작해서 점진적으로 확장해 나가세요.\n\
             \n\
             **3. 세 번째 핵심 원칙**\n\
             지속적인 개선과 피드백 루프를 만드세요.\n\
             한 번에 완벽할 필요는 없습니다.\n"
        ),
        Section::CaseStudy => "실제 사례를 통해 살펴보겠습니다.\n\
             \n\
             한 사용자는 이 방법을 적용한 후 다음과 같은 결과를 얻었습니다:\n\
             • 효율성 2배 증가\n\
             • 시간 절약 50%\n\
             • 만족도 크게 향상\n\
             \n\
             여러분도 충분히 할 수 있습니다.\n\
             핵심은 꾸준함과 올바른 방향성입니다.\n"
            .to_string(),
        Section::Recap => format!(
            "오늘 배운 내용을 정리하면:\n\
             1. {keyword}의 핵심 원리 이해하기\n\
             2. 작은 것부터 실천하기\n\
             3. 지속적으로 개선하기\n"
        ),
        Section::CallToAction => "지금 바로 시작해보세요!\n\
             오늘부터 하루에 10분만 투자해도 큰 변화를 만들 수 있습니다.\n\
             \n\
             이 영상이 도움이 되셨다면 좋아요와 구독 부탁드립니다.\n\
             댓글로 여러분의 경험도 공유해주세요!\n\
             \n\
             다음 영상에서 더 깊이 있는 내용으로 찾아뵙겠습니다.\n\
             감사합니다! 🙏\n"
            .to_string(),
    }
}

/// Convenience wrapper using the default template.
pub fn render_script(topic: &TopicSuggestion, original_script: &str) -> GeneratedScript {
    ScriptTemplate::new().render(topic, original_script)
}
