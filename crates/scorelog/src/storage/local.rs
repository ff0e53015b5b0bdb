use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError, StorageResult};
use crate::config::ScorelogConfig;

/// Local filesystem storage implementation
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Create LocalStorage from ScorelogConfig
    pub fn from_config(config: &ScorelogConfig) -> Self {
        Self::new(&config.base_dir)
    }

    /// Get full path by joining base path with relative path
    fn full_path(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &Path) -> StorageResult<bool> {
        Ok(self.full_path(path).is_file())
    }

    fn read(&self, path: &Path) -> StorageResult<Vec<u8>> {
        let full_path = self.full_path(path);
        fs::read(&full_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                StorageError::NotFound(full_path.display().to_string())
            }
            _ => StorageError::IoError(e),
        })
    }

    fn write(&self, path: &Path, content: &[u8]) -> StorageResult<()> {
        let full_path = self.full_path(path);
        if full_path.is_dir() {
            return Err(StorageError::InvalidPath(full_path.display().to_string()));
        }

        // Create parent directory if it doesn't exist
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::File::create(&full_path)?;
        file.write_all(content)?;
        file.sync_all()?;
        Ok(())
    }
}
