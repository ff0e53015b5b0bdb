use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::{LogEntry, LogError, RecordedInputs, Result};
use crate::storage::Storage;

/// Default location of the log document
pub const DEFAULT_LOG_PATH: &str = "data/log.json";

/// Keyed, first-write-wins record of combined scores.
///
/// The whole mapping is loaded when the log is opened and rewritten on every
/// successful insert. Two `ResultLog`s on the same document do not see each
/// other's inserts, and the last one to write overwrites the other; callers
/// that need several writers must serialize access themselves.
pub struct ResultLog {
    storage: Arc<dyn Storage>,
    path: PathBuf,
    entries: IndexMap<String, RecordedInputs>,
}

impl ResultLog {
    /// Load the document at `path`, or start empty if it does not exist.
    ///
    /// Nothing is written until the first successful [`ResultLog::write`].
    pub fn open(storage: Arc<dyn Storage>, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries: IndexMap<String, RecordedInputs> = if storage.exists(&path)? {
            let content = storage.read(&path)?;
            serde_json::from_slice(&content).map_err(|source| LogError::Malformed {
                path: path.display().to_string(),
                source,
            })?
        } else {
            IndexMap::new()
        };

        debug!("Opened result log {} with {} entries", path.display(), entries.len());
        Ok(Self {
            storage,
            path,
            entries,
        })
    }

    /// Record `inputs` under `score` unless that score is already present.
    ///
    /// Returns `true` when the entry was inserted and persisted. A repeated
    /// score is dropped without error and without touching storage.
    pub fn write(&mut self, score: i64, inputs: RecordedInputs) -> Result<bool> {
        let key = score.to_string();
        if self.entries.contains_key(&key) {
            debug!("Score {} already logged, dropping {}", key, inputs);
            return Ok(false);
        }

        self.entries.insert(key, inputs);
        self.persist()?;
        info!("Logged score {} to {}", score, self.path.display());
        Ok(true)
    }

    /// Inputs recorded for `score`, if any
    pub fn get(&self, score: i64) -> Option<&RecordedInputs> {
        self.entries.get(&score.to_string())
    }

    pub fn contains(&self, score: i64) -> bool {
        self.entries.contains_key(&score.to_string())
    }

    /// Entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = LogEntry<'_>> {
        self.entries
            .iter()
            .map(|(key, inputs)| LogEntry { key, inputs })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.entries
            .serialize(&mut serializer)
            .map_err(|e| LogError::SerializationError(e.to_string()))?;

        self.storage.write(&self.path, &buffer)?;
        Ok(())
    }
}

impl std::fmt::Debug for ResultLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultLog")
            .field("path", &self.path)
            .field("entries", &self.entries.len())
            .finish()
    }
}
