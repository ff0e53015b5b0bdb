//! In-memory storage backend for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Storage, StorageError, StorageResult};

/// In-memory storage backend
///
/// Clones share the same documents, so a test can keep a handle and
/// inspect what a log wrote. Every successful `write` is counted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    documents: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with one document
    pub fn with_document(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        let storage = Self::new();
        if let Ok(mut documents) = storage.documents.write() {
            documents.insert(path.into(), content.into());
        }
        storage
    }

    /// Number of writes performed since creation
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current content of a document as UTF-8, if present
    pub fn document(&self, path: &Path) -> Option<String> {
        let documents = self.documents.read().ok()?;
        documents
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    fn poisoned() -> StorageError {
        StorageError::IoError(std::io::Error::other("in-memory storage lock poisoned"))
    }
}

impl Storage for InMemoryStorage {
    fn exists(&self, path: &Path) -> StorageResult<bool> {
        let documents = self.documents.read().map_err(|_| Self::poisoned())?;
        Ok(documents.contains_key(path))
    }

    fn read(&self, path: &Path) -> StorageResult<Vec<u8>> {
        let documents = self.documents.read().map_err(|_| Self::poisoned())?;
        documents
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.display().to_string()))
    }

    fn write(&self, path: &Path, content: &[u8]) -> StorageResult<()> {
        let mut documents = self.documents.write().map_err(|_| Self::poisoned())?;
        documents.insert(path.to_path_buf(), content.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
