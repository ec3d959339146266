//! Analysis Report - Output structure for script analysis.
//!
//! Contains everything the engine derived from one source script.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryFlags};
use super::keywords::KeywordResult;
use super::topics::TopicSuggestion;

/// Complete report from one analysis call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Name of the analyzer that produced the report
    pub analyzer: String,

    /// Ranked keywords with their frequencies
    pub keywords: Vec<KeywordResult>,

    /// Category signals
    pub flags: CategoryFlags,

    /// Topic suggestions, in rule order
    pub topics: Vec<TopicSuggestion>,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

impl AnalysisReport {
    /// Create a new empty report
    pub fn new(analyzer: impl Into<String>) -> Self {
        Self {
            analyzer: analyzer.into(),
            keywords: vec![],
            flags: CategoryFlags::default(),
            topics: vec![],
            processing_time_ms: 0,
            timestamp: Utc::now(),
        }
    }

    /// Plain keyword strings, in rank order
    pub fn keyword_strings(&self) -> Vec<&str> {
        self.keywords.iter().map(|k| k.keyword.as_str()).collect()
    }

    pub fn matched_categories(&self) -> Vec<Category> {
        self.flags.matched()
    }

    /// Look up a suggestion by its rule id
    pub fn topic(&self, id: u8) -> Option<&TopicSuggestion> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        let categories: Vec<&str> = self.matched_categories().iter().map(|c| c.label()).collect();
        format!(
            "Analyzer: {}, Keywords: {}, Categories: [{}], Topics: {}, Time: {}ms",
            self.analyzer,
            self.keywords.len(),
            categories.join(", "),
            self.topics.len(),
            self.processing_time_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_creation() {
        let report = AnalysisReport::new("local");

        assert_eq!(report.analyzer, "local");
        assert!(report.keywords.is_empty());
        assert!(report.topics.is_empty());
        assert!(report.matched_categories().is_empty());
    }

    #[test]
    fn test_summary() {
        let mut report = AnalysisReport::new("local");
        report.flags.story = true;
        let summary = report.summary();

        assert!(summary.contains("Keywords:"));
        assert!(summary.contains("[story]"));
    }

    #[test]
    fn test_topic_lookup() {
        let mut report = AnalysisReport::new("local");
        report.topics.push(TopicSuggestion {
            id: 4,
            title: "t".into(),
            description: "d".into(),
        });

        assert!(report.topic(4).is_some());
        assert!(report.topic(1).is_none());
    }
}
