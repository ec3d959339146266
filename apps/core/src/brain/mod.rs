//! # Brain Module
//!
//! Deterministic, rule-based analysis of viral video scripts.
//! No model calls: word frequency and regex patterns only.
//!
//! ## Components
//! - `keywords`: frequency-ranked keyword extraction
//! - `category`: rhetorical category detection using regex patterns
//! - `topics`: topic suggestions from keywords and categories
//! - `template`: six-section script rendering
//! - `report`: Output data structure
//! - `analyzer`: Main orchestrator and the `ScriptAnalyzer` capability

pub mod analyzer;
pub mod category;
pub mod keywords;
pub mod report;
pub mod template;
pub mod topics;

// Re-export main types for convenience
pub use analyzer::{LocalAnalyzer, ScriptAnalyzer};
pub use category::{Category, CategoryClassifier, CategoryFlags};
pub use keywords::{extract_keywords, KeywordExtractor, KeywordResult, FALLBACK_KEYWORD};
pub use report::AnalysisReport;
pub use template::{render_script, GeneratedScript, ScriptTemplate, Section};
pub use topics::{TopicSuggestion, TopicSynthesizer, MAX_TOPICS};
