//! Project persistence.
//!
//! [`ProjectStore`] is the contract the rest of the crate needs. [`SqliteProjectStore`]
//! keeps every project in one collection: a single `kv_store` row under
//! [`PROJECTS_KEY`] whose value is the JSON array of records, newest first.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::config::StorageConfig;
use crate::error::AppError;
use crate::fs_manager::PortablePathManager;
use crate::models::{
    validate_project_name, Project, ProjectDraft, ProjectSummary, MAX_PROJECT_NAME_CHARS,
};

/// Collection key holding the project array.
pub const PROJECTS_KEY: &str = "youtube-script-projects";

/// Defines the public interface for project persistence.
#[async_trait]
pub trait ProjectStore: Send + Sync + 'static {
    /// Persist a new project and return it with its generated id.
    async fn save(&self, draft: ProjectDraft) -> Result<Project, AppError>;

    /// Summaries of every project, most recent first.
    async fn list(&self) -> Result<Vec<ProjectSummary>, AppError>;

    /// Fetch one project.
    async fn get(&self, id: &str) -> Result<Project, AppError>;

    /// Rename a project and touch its timestamp.
    async fn rename(&self, id: &str, new_name: &str) -> Result<Project, AppError>;

    /// Remove a project. Returns whether anything was removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

/// Generate a project id: `project-<epoch-millis>-<9 alphanumerics>`.
pub fn new_project_id(now_millis: i64) -> String {
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(9).collect();
    format!("project-{}-{}", now_millis, suffix)
}

/// Size of a key/value pair as a browser's local storage counts it: UTF-16 code units,
/// two bytes each.
pub fn stored_size(key: &str, value: &str) -> usize {
    (key.encode_utf16().count() + value.encode_utf16().count()) * 2
}

/// SQLite-backed project store
pub struct SqliteProjectStore {
    pool: SqlitePool,
    quota_bytes: usize,
    /// Serializes read-modify-write cycles on the collection
    write_lock: Mutex<()>,
}

impl SqliteProjectStore {
    /// Open (creating if missing) the database described by `config` and run migrations.
    pub async fn open(config: &StorageConfig) -> Result<Self, AppError> {
        if let Some(parent) = config.db_path.parent() {
            PortablePathManager::ensure_dir(parent)?;
        }

        let db_url = format!("sqlite://{}", config.db_path.to_string_lossy());
        info!("Initializing project store at: {}", db_url);

        let options = SqliteConnectOptions::from_str(&db_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::with_pool(pool, config.quota_bytes).await
    }

    /// Wrap an existing pool, applying migrations.
    pub async fn with_pool(pool: SqlitePool, quota_bytes: usize) -> Result<Self, AppError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Project store ready (quota {} bytes).", quota_bytes);

        Ok(Self {
            pool,
            quota_bytes,
            write_lock: Mutex::new(()),
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Read the whole collection. Unparseable data is treated as an empty collection.
    async fn load_all(&self) -> Result<Vec<Project>, AppError> {
        let raw: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?")
            .bind(PROJECTS_KEY)
            .fetch_optional(&self.pool)
            .await?;

        let Some(raw) = raw else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Project>>(&raw) {
            Ok(projects) => Ok(projects),
            Err(e) => {
                warn!("Project collection is unreadable, treating as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Replace the whole collection, enforcing the quota first.
    async fn store_all(&self, projects: &[Project]) -> Result<(), AppError> {
        let payload = serde_json::to_string(projects)
            .map_err(|e| AppError::Internal(format!("Failed to serialize projects: {}", e)))?;

        let used = stored_size(PROJECTS_KEY, &payload);
        if used > self.quota_bytes {
            warn!(
                "Project collection needs {} bytes, quota is {}",
                used, self.quota_bytes
            );
            return Err(AppError::StorageExhausted {
                used: Some(used),
                quota: self.quota_bytes,
            });
        }

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(PROJECTS_KEY)
        .bind(&payload)
        .bind(Utc::now().timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_write_failure(e, self.quota_bytes))?;

        debug!("Stored {} projects ({} bytes)", projects.len(), used);
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for SqliteProjectStore {
    async fn save(&self, draft: ProjectDraft) -> Result<Project, AppError> {
        if draft.is_blank() {
            return Err(AppError::NothingToSave);
        }
        draft.validate()?;

        let _guard = self.write_lock.lock().await;

        let now = Utc::now().timestamp_millis();
        let project = Project {
            id: new_project_id(now),
            name: draft.resolved_name(),
            original: draft.original,
            chosen_topic: draft.chosen_topic,
            generated: draft.generated.filter(|g| !g.is_empty()),
            updated_at: now,
        };

        let mut projects = self.load_all().await?;
        projects.insert(0, project.clone());
        self.store_all(&projects).await?;

        info!("Project saved: {} ({})", project.name, project.id);
        Ok(project)
    }

    async fn list(&self) -> Result<Vec<ProjectSummary>, AppError> {
        let projects = self.load_all().await?;
        Ok(projects.iter().map(Project::summary).collect())
    }

    async fn get(&self, id: &str) -> Result<Project, AppError> {
        self.load_all()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn rename(&self, id: &str, new_name: &str) -> Result<Project, AppError> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Project name cannot be blank".to_string()));
        }
        validate_project_name(name).map_err(|_| {
            AppError::Validation(format!(
                "Project name is longer than {} characters",
                MAX_PROJECT_NAME_CHARS
            ))
        })?;

        let _guard = self.write_lock.lock().await;

        let mut projects = self.load_all().await?;
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        project.name = name.to_string();
        project.updated_at = Utc::now().timestamp_millis();
        let renamed = project.clone();

        self.store_all(&projects).await?;

        info!("Project renamed: {} -> {}", renamed.id, renamed.name);
        Ok(renamed)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut projects = self.load_all().await?;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            debug!("Delete requested for unknown project: {}", id);
            return Ok(false);
        }

        self.store_all(&projects).await?;

        info!("Project deleted: {}", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_shape() {
        let id = new_project_id(1_700_000_000_123);
        let parts: Vec<&str> = id.splitn(3, '-').collect();

        assert_eq!(parts[0], "project");
        assert_eq!(parts[1], "1700000000123");
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_stored_size_counts_utf16_units() {
        assert_eq!(stored_size("ab", "cd"), 8);
        // One Hangul syllable is three UTF-8 bytes but a single UTF-16 unit
        assert_eq!(stored_size("", "가나다"), 6);
        // Astral characters take a surrogate pair
        assert_eq!(stored_size("", "🎯"), 4);
    }

    #[test]
    fn test_project_ids_unique() {
        assert_ne!(new_project_id(1), new_project_id(1));
    }
}
