//! Script workflow service.
//!
//! Every call takes an explicit request and returns a response; nothing about the
//! user's current selection is remembered between calls.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::brain::{AnalysisReport, GeneratedScript, ScriptAnalyzer, TopicSuggestion};
use crate::error::AppError;
use crate::export;
use crate::models::{Project, ProjectDraft, ProjectSummary};
use crate::source::SourceScript;
use crate::store::ProjectStore;

/// Result of topic suggestion
#[derive(Debug, Clone, Serialize)]
pub struct SuggestResponse {
    /// The validated script the report was computed from
    pub script: SourceScript,
    pub report: AnalysisReport,
}

impl SuggestResponse {
    pub fn topics(&self) -> &[TopicSuggestion] {
        &self.report.topics
    }
}

/// Request to render a new script
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub selected_topic: Option<TopicSuggestion>,
    /// Original script text, as used for suggestion
    pub original: String,
}

/// Request to save the current work as a project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveRequest {
    pub name: String,
    pub original: String,
    pub selected_topic: Option<TopicSuggestion>,
    pub generated: Option<String>,
}

impl From<SaveRequest> for ProjectDraft {
    fn from(req: SaveRequest) -> Self {
        ProjectDraft {
            name: req.name,
            original: req.original,
            chosen_topic: req.selected_topic.map(|t| t.title),
            generated: req.generated,
        }
    }
}

/// A project loaded back into a working state
#[derive(Debug, Clone, Serialize)]
pub struct LoadedProject {
    pub project: Project,
    /// The saved topic as the only selectable suggestion
    pub selected_topic: Option<TopicSuggestion>,
}

/// Ties an analyzer and a project store together
pub struct ScriptWorkflow<A, S> {
    analyzer: A,
    store: S,
    export_dir: PathBuf,
}

impl<A: ScriptAnalyzer, S: ProjectStore> ScriptWorkflow<A, S> {
    pub fn new(analyzer: A, store: S, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            analyzer,
            store,
            export_dir: export_dir.into(),
        }
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Validate the raw script and suggest topics for it.
    pub async fn suggest_topics(&self, raw: &str) -> Result<SuggestResponse, AppError> {
        let script = SourceScript::new(raw).inspect_err(|e| warn!("Suggestion refused: {}", e))?;
        let report = self.analyzer.suggest(&script).await?;
        Ok(SuggestResponse { script, report })
    }

    /// Render a script for the selected topic.
    pub async fn generate_script(&self, req: GenerateRequest) -> Result<GeneratedScript, AppError> {
        let topic = req.selected_topic.ok_or(AppError::NoTopicSelected)?;
        self.analyzer.render(&topic, &req.original).await
    }

    pub async fn save_project(&self, req: SaveRequest) -> Result<Project, AppError> {
        self.store.save(req.into()).await
    }

    pub async fn list_projects(&self) -> Result<Vec<ProjectSummary>, AppError> {
        self.store.list().await
    }

    pub async fn load_project(&self, id: &str) -> Result<LoadedProject, AppError> {
        let project = self.store.get(id).await?;
        let selected_topic = project.restored_topic();
        info!("Project loaded: {} ({})", project.name, project.id);
        Ok(LoadedProject {
            project,
            selected_topic,
        })
    }

    pub async fn rename_project(&self, id: &str, new_name: &str) -> Result<Project, AppError> {
        self.store.rename(id, new_name).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<bool, AppError> {
        self.store.delete(id).await
    }

    /// Write `text` to the export directory.
    pub fn export_script(&self, text: &str, project_name: &str) -> Result<PathBuf, AppError> {
        export::export_script(text, project_name, &self.export_dir)
    }
}
