use std::io;
use thiserror::Error;

/// SQLite result code for "database or disk is full".
const SQLITE_FULL: &str = "13";

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// No script text was provided to topic suggestion.
    #[error("대본을 입력해 주세요")]
    EmptyInput,

    /// The script exceeds the accepted character bound.
    #[error("대본이 너무 깁니다 ({length}자, 최대 {max}자)")]
    OversizeInput { length: usize, max: usize },

    /// Script generation was requested without a chosen topic.
    #[error("주제를 선택해 주세요")]
    NoTopicSelected,

    /// A project save was requested with neither original nor generated text.
    #[error("저장할 내용이 없습니다")]
    NothingToSave,

    /// An export was requested for an empty document.
    #[error("다운로드할 내용이 없습니다")]
    NothingToExport,

    /// The requested project does not exist.
    #[error("프로젝트를 찾을 수 없습니다: {0}")]
    NotFound(String),

    /// The project collection would exceed its storage capacity.
    ///
    /// `used` is the size the collection needed, when known. A full disk reports none.
    #[error("저장 공간이 부족합니다 ({})", storage_usage(.used, .quota))]
    StorageExhausted { used: Option<usize>, quota: usize },

    /// A write to the project store failed for a reason other than capacity.
    #[error("저장에 실패했습니다: {0}")]
    PersistenceFailure(String),

    /// Represents errors originating from the database, typically from `sqlx`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the caller can recover by prompting the user again.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::EmptyInput
                | AppError::OversizeInput { .. }
                | AppError::NoTopicSelected
                | AppError::NothingToSave
                | AppError::NothingToExport
                | AppError::NotFound(_)
                | AppError::StorageExhausted { .. }
                | AppError::Validation(_)
        )
    }

    /// Classifies a failed store write: a full disk is a capacity problem, anything else
    /// is a generic persistence failure.
    pub fn from_write_failure(err: sqlx::Error, quota: usize) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(SQLITE_FULL) {
                return AppError::StorageExhausted { used: None, quota };
            }
        }
        AppError::PersistenceFailure(err.to_string())
    }
}

fn storage_usage(used: &Option<usize>, quota: &usize) -> String {
    match used {
        Some(used) => format!("{} / {} bytes", used, quota),
        None => format!("disk full, quota {} bytes", quota),
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Database(sqlx::Error::Migrate(Box::new(err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_recoverable_split() {
        assert!(AppError::EmptyInput.is_user_recoverable());
        assert!(AppError::NoTopicSelected.is_user_recoverable());
        assert!(AppError::StorageExhausted {
            used: Some(10),
            quota: 5
        }
        .is_user_recoverable());
        assert!(!AppError::PersistenceFailure("disk".into()).is_user_recoverable());
        assert!(!AppError::Internal("bug".into()).is_user_recoverable());
    }

    #[test]
    fn test_oversize_message_carries_bounds() {
        let err = AppError::OversizeInput {
            length: 20_001,
            max: 20_000,
        };
        let message = err.to_string();
        assert!(message.contains("20001"));
        assert!(message.contains("20000"));
    }

    #[test]
    fn test_generic_write_failure_is_not_exhaustion() {
        let err = AppError::from_write_failure(sqlx::Error::PoolTimedOut, 1024);
        assert!(matches!(err, AppError::PersistenceFailure(_)));
    }

    #[test]
    fn test_exhaustion_message_with_and_without_usage() {
        let quota = AppError::StorageExhausted {
            used: Some(700),
            quota: 600,
        };
        assert!(quota.to_string().contains("700 / 600 bytes"));

        let disk = AppError::StorageExhausted {
            used: None,
            quota: 600,
        };
        assert!(disk.to_string().contains("disk full"));
    }
}
