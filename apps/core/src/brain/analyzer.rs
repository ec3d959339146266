//! Script Analyzer - Main orchestrator for the brain module.
//!
//! Coordinates keyword extraction, category classification, topic synthesis and
//! template rendering. The pipeline is:
//!
//! ```text
//! text -> keywords -> category flags -> topics -> [user picks one] -> script
//! ```
//!
//! [`ScriptAnalyzer`] is the capability callers program against. [`LocalAnalyzer`] is
//! the rule-based variant; a variant delegating to an external generation model would
//! implement the same trait.

use async_trait::async_trait;
use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info};

use super::category::CategoryClassifier;
use super::keywords::KeywordExtractor;
use super::report::AnalysisReport;
use super::template::{GeneratedScript, ScriptTemplate};
use super::topics::{TopicSuggestion, TopicSynthesizer};
use crate::error::AppError;
use crate::source::SourceScript;

/// Defines the public interface for a script analysis backend.
///
/// Rendering and project contracts downstream are identical whichever variant is used.
#[async_trait]
pub trait ScriptAnalyzer: Send + Sync + 'static {
    /// Short identifier recorded in reports and logs.
    fn name(&self) -> &'static str;

    /// Analyze a validated script and propose topics.
    async fn suggest(&self, script: &SourceScript) -> Result<AnalysisReport, AppError>;

    /// Render a new script for a chosen topic, modeled on the original.
    async fn render(
        &self,
        topic: &TopicSuggestion,
        original: &str,
    ) -> Result<GeneratedScript, AppError>;
}

/// Rule-based analyzer. Stateless; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct LocalAnalyzer {
    keyword_extractor: KeywordExtractor,
    category_classifier: CategoryClassifier,
    topic_synthesizer: TopicSynthesizer,
    template: ScriptTemplate,
}

impl LocalAnalyzer {
    /// Create a new analyzer with default settings
    pub fn new() -> Self {
        Self {
            keyword_extractor: KeywordExtractor::new(),
            category_classifier: CategoryClassifier::new(),
            topic_synthesizer: TopicSynthesizer::new(),
            template: ScriptTemplate::new(),
        }
    }

    /// Analyze a script and produce a report
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let start = Instant::now();
        let mut report = AnalysisReport::new(ScriptAnalyzer::name(self));

        // 1. Extract keywords
        report.keywords = self.keyword_extractor.extract(text, None);
        let keywords = KeywordExtractor::or_fallback(&report.keywords);
        debug!("Extracted keywords: {:?}", keywords);

        // 2. Classify categories
        report.flags = self.category_classifier.classify(text);

        // 3. Synthesize topics (needs keywords and flags first)
        report.topics = self.topic_synthesizer.synthesize(&keywords, &report.flags);

        // 4. Set timing
        report.processing_time_ms = start.elapsed().as_millis() as u64;
        report.timestamp = Utc::now();

        report
    }

    /// Render a script for `topic`
    pub fn generate(&self, topic: &TopicSuggestion, original: &str) -> GeneratedScript {
        self.template.render(topic, original)
    }
}

#[async_trait]
impl ScriptAnalyzer for LocalAnalyzer {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn suggest(&self, script: &SourceScript) -> Result<AnalysisReport, AppError> {
        let report = self.analyze(script.as_str());
        info!("Topics suggested. {}", report.summary());
        Ok(report)
    }

    async fn render(
        &self,
        topic: &TopicSuggestion,
        original: &str,
    ) -> Result<GeneratedScript, AppError> {
        let script = self.generate(topic, original);
        info!(
            "Script generated for topic #{} '{}' ({} chars)",
            topic.id,
            topic.title,
            script.as_str().chars().count()
        );
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_keyword_feeds_topics() {
        let analyzer = LocalAnalyzer::new();

        let report = analyzer.analyze("... !!! ???");

        assert!(report.keywords.is_empty());
        assert!(report.flags.is_empty());
        let titles: Vec<&str> = report.topics.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["주제의 숨겨진 진실", "관련 주제로 시작하는 변화"]);
    }

    #[test]
    fn test_keywords_drive_titles() {
        let analyzer = LocalAnalyzer::new();

        let report = analyzer.analyze("바리스타 이야기: 바리스타 바리스타 원두커피 커피");

        // "커피" is too short to count
        assert_eq!(report.keyword_strings(), vec!["바리스타", "이야기", "원두커피"]);
        assert!(report.flags.story);
        assert_eq!(report.topic(3).unwrap().title, "바리스타에서 배우는 핵심 교훈");
        assert_eq!(report.topic(5).unwrap().title, "이야기로 시작하는 변화");
    }

    #[test]
    fn test_pure_analysis() {
        let analyzer = LocalAnalyzer::new();
        let text = "어떻게 하면 문제를 해결할까? 해결 방법 가이드";

        let a = analyzer.analyze(text);
        let b = analyzer.analyze(text);

        assert_eq!(a.flags, b.flags);
        assert_eq!(a.keywords, b.keywords);
        assert_eq!(a.topics, b.topics);
    }

    #[tokio::test]
    async fn test_trait_round() {
        let analyzer = LocalAnalyzer::new();
        let script = SourceScript::new("다이어트 방법 다이어트 다이어트").unwrap();

        let report = analyzer.suggest(&script).await.unwrap();
        assert_eq!(report.analyzer, analyzer.name());
        let topic = report.topic(1).unwrap().clone();
        assert_eq!(topic.title, "다이어트를 활용한 실전 가이드");

        let generated = analyzer.render(&topic, script.as_str()).await.unwrap();
        assert!(generated.as_str().contains("오늘은 다이어트에 대해"));
    }
}
