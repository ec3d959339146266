use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Resolves the portable data layout next to the executable:
///
/// ```text
/// <root>/data/db       SQLite project store
/// <root>/data/exports  downloaded scripts
/// ```
pub struct PortablePathManager;

impl PortablePathManager {
    /// Récupère le répertoire racine de l'application (là où se trouve l'exécutable).
    pub fn root_dir() -> PathBuf {
        match std::env::current_exe() {
            Ok(mut path) => {
                path.pop(); // Enlève le nom de l'exécutable pour garder le dossier
                path
            }
            Err(e) => {
                warn!(
                    "Failed to get current exe path: {}. Falling back to current_dir.",
                    e
                );
                std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            }
        }
    }

    /// Récupère le répertoire de données principal (./data).
    pub fn data_dir() -> PathBuf {
        Self::root_dir().join("data")
    }

    /// Répertoire de la base de données sous `data`.
    pub fn db_dir_in(data_dir: &Path) -> PathBuf {
        data_dir.join("db")
    }

    /// Répertoire des exports sous `data`.
    pub fn exports_dir_in(data_dir: &Path) -> PathBuf {
        data_dir.join("exports")
    }

    /// Crée un dossier s'il n'existe pas.
    pub fn ensure_dir(path: &Path) -> Result<(), std::io::Error> {
        if !path.exists() {
            info!("Creating directory: {:?}", path);
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Initialise l'arborescence des fichiers.
    /// Crée les dossiers data, db et exports s'ils n'existent pas.
    pub fn init(data_dir: &Path) -> Result<(), std::io::Error> {
        Self::ensure_dir(data_dir)?;
        Self::ensure_dir(&Self::db_dir_in(data_dir))?;
        Self::ensure_dir(&Self::exports_dir_in(data_dir))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_layout() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");

        PortablePathManager::init(&data).unwrap();

        assert!(PortablePathManager::db_dir_in(&data).is_dir());
        assert!(PortablePathManager::exports_dir_in(&data).is_dir());
        // Idempotent
        PortablePathManager::init(&data).unwrap();
    }

    #[test]
    fn test_data_dir_is_next_to_executable() {
        assert!(PortablePathManager::data_dir().ends_with("data"));
    }
}
