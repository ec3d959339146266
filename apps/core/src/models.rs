use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::brain::TopicSuggestion;
use crate::source::{char_count, MAX_SCRIPT_CHARS};

/// Name given to projects saved without one.
pub const UNTITLED_PROJECT: &str = "제목 없음";

/// Longest accepted project name, in characters after trimming.
pub const MAX_PROJECT_NAME_CHARS: usize = 200;

/// Description attached to a topic restored from a saved project.
pub const RESTORED_TOPIC_DESCRIPTION: &str = "저장된 주제";

/// Represents a persisted project.
///
/// Serialized with the field names of the stored collection:
/// `{ id, name, original, chosenTopic, generated, updatedAt }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier, generated at save time.
    pub id: String,
    /// The user-defined name of the project.
    pub name: String,
    /// The original script text.
    pub original: String,
    /// Title of the chosen topic, if any.
    #[serde(default)]
    pub chosen_topic: Option<String>,
    /// The generated script text, if any.
    #[serde(default)]
    pub generated: Option<String>,
    /// Epoch milliseconds of the last save or rename.
    pub updated_at: i64,
}

impl Project {
    /// The chosen topic as a single selectable suggestion.
    pub fn restored_topic(&self) -> Option<TopicSuggestion> {
        self.chosen_topic.as_ref().map(|title| TopicSuggestion {
            id: 1,
            title: title.clone(),
            description: RESTORED_TOPIC_DESCRIPTION.to_string(),
        })
    }

    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            chosen_topic: self.chosen_topic.clone(),
            updated_at: self.updated_at,
        }
    }
}

/// Represents a project entry in the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub chosen_topic: Option<String>,
    pub updated_at: i64,
}

/// Represents the data needed to save a new project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProjectDraft {
    /// Project name; blank names are replaced with [`UNTITLED_PROJECT`].
    #[validate(custom(function = "validate_project_name"))]
    pub name: String,
    /// The original script text. Bounded like [`crate::source::SourceScript`], after trimming.
    #[validate(custom(function = "validate_original_length"))]
    pub original: String,
    /// Title of the chosen topic, if any.
    pub chosen_topic: Option<String>,
    /// The generated script text, if any.
    pub generated: Option<String>,
}

impl ProjectDraft {
    /// A draft with nothing worth keeping.
    pub fn is_blank(&self) -> bool {
        self.original.trim().is_empty()
            && self
                .generated
                .as_deref()
                .map_or(true, |g| g.trim().is_empty())
    }

    /// The name to store, trimmed, with the untitled default applied.
    pub fn resolved_name(&self) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            UNTITLED_PROJECT.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// Project names are measured the way they are stored: trimmed.
pub fn validate_project_name(name: &str) -> Result<(), ValidationError> {
    if char_count(name.trim()) > MAX_PROJECT_NAME_CHARS {
        let mut err = ValidationError::new("length");
        err.add_param("max".into(), &MAX_PROJECT_NAME_CHARS);
        return Err(err);
    }
    Ok(())
}

fn validate_original_length(original: &str) -> Result<(), ValidationError> {
    if char_count(original.trim()) > MAX_SCRIPT_CHARS {
        let mut err = ValidationError::new("length");
        err.add_param("max".into(), &MAX_SCRIPT_CHARS);
        return Err(err);
    }
    Ok(())
}
