use std::path::Path;

use super::StorageResult;

/// Storage trait for whole-document reads and writes.
///
/// Writes replace the document. Implementations make no promise about
/// concurrent writers.
pub trait Storage: Send + Sync {
    /// Check if a document exists
    fn exists(&self, path: &Path) -> StorageResult<bool>;

    /// Read the full document
    fn read(&self, path: &Path) -> StorageResult<Vec<u8>>;

    /// Replace the document with `content`
    fn write(&self, path: &Path, content: &[u8]) -> StorageResult<()>;
}
