use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".vocab-keeper";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "words.sqlite";
/// Log directory name inside the application data directory.
const LOG_DIR_NAME: &str = "logs";

/// Filesystem locations used by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub db_file: PathBuf,
    pub log_dir: PathBuf,
}

impl AppPaths {
    /// Resolve the default layout inside the user's home directory.
    pub fn resolve() -> Result<Self> {
        let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::from_root(base_dirs.home_dir().join(DATA_DIR_NAME)))
    }

    /// Lay out the database and logs under an arbitrary root directory.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let data_dir = root.as_ref().to_path_buf();
        Self {
            db_file: data_dir.join(DB_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            data_dir,
        }
    }

    /// Create the data and log directories if they are missing.
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).context("failed to create data directory")?;
        fs::create_dir_all(&self.log_dir).context("failed to create log directory")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_root_places_files_under_the_root() {
        let paths = AppPaths::from_root("/tmp/vk");
        assert_eq!(paths.db_file, PathBuf::from("/tmp/vk/words.sqlite"));
        assert_eq!(paths.log_dir, PathBuf::from("/tmp/vk/logs"));
    }

    #[test]
    fn prepare_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths::from_root(dir.path().join("nested"));
        paths.prepare().unwrap();
        assert!(paths.data_dir.is_dir());
        assert!(paths.log_dir.is_dir());
    }
}
