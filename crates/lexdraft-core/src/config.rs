//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths to all lexdraft data directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Template files (`data/templates/`), base language at the root of
    /// this directory, localized copies under `<lang>/` subdirectories.
    pub templates: PathBuf,
    /// History/document store directory (`data/history/`).
    pub history: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            templates: root.join("templates"),
            history: root.join("history"),
            root,
        };
        paths.ensure_dirs()?;
        Ok(paths)
    }

    fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.templates)?;
        std::fs::create_dir_all(&self.history)?;
        Ok(())
    }
}

/// Top-level lexdraft configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexdraftConfig {
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Translation request deadline in seconds.
    pub translation_timeout_secs: u64,
}

impl LexdraftConfig {
    /// Create configuration from environment and defaults.
    ///
    /// `LEXDRAFT_TEMPLATES` overrides the template directory, which lets a
    /// deployment point at a checkout's `templates/` without copying files
    /// into the data root.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let mut data_paths = DataPaths::new(data_dir)?;
        if let Ok(dir) = std::env::var("LEXDRAFT_TEMPLATES") {
            data_paths.templates = PathBuf::from(dir);
        }

        Ok(Self {
            data_paths,
            translation_timeout_secs: 5,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_paths_created() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path().join("data")).unwrap();
        assert!(paths.templates.is_dir());
        assert!(paths.history.is_dir());
    }

    #[test]
    fn test_from_env_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LexdraftConfig::from_env(dir.path().join("data")).unwrap();
        assert_eq!(config.translation_timeout_secs, 5);
        assert_eq!(config.data_paths.root, dir.path().join("data"));
    }
}
