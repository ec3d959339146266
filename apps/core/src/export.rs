//! Plain-text download of a generated script.

use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::AppError;
use crate::fs_manager::PortablePathManager;

/// File stem used when the project has no name.
pub const DEFAULT_EXPORT_NAME: &str = "새_대본";

/// Build `<name>_<millis>.txt`, keeping the name a single path component.
pub fn export_file_name(project_name: &str, millis: i64) -> String {
    let trimmed = project_name.trim();
    let stem: String = if trimmed.is_empty() {
        DEFAULT_EXPORT_NAME.to_string()
    } else {
        trimmed
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect()
    };
    format!("{}_{}.txt", stem, millis)
}

/// Write `text` as UTF-8 into `export_dir` and return the written path.
pub fn export_script(text: &str, project_name: &str, export_dir: &Path) -> Result<PathBuf, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::NothingToExport);
    }

    PortablePathManager::ensure_dir(export_dir)?;

    let path = export_dir.join(export_file_name(project_name, Utc::now().timestamp_millis()));
    fs::write(&path, text)?;

    info!("Script exported to {:?} ({} bytes)", path, text.len());
    Ok(path)
}
