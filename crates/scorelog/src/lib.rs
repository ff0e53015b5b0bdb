//! scorelog: combine heterogeneous results into a score and keep a
//! first-write-wins JSON log of every distinct score seen.
//!
//! The pure rules live in `scorelog-core`; this crate adds storage, the
//! log document, configuration and the orchestration in [`app`].

pub mod app;
pub mod config;
pub mod error;
pub mod result_log;
pub mod storage;

// Re-export core types
pub use scorelog_core::{
    ConstantTable, CoreError, ProcessingError, ProcessingFailure, ResultValue, TestType,
    ValidationError, collect_candidate, collect_constant, combine, combine_values,
    validate_range, validate_test_type,
};

pub use app::{DEFAULT_TAG, ProcessOutcome, ResultProcessor, ResultProcessorBuilder};
pub use config::ScorelogConfig;
pub use error::{Result as ScorelogResult, ScorelogError};
pub use result_log::{DEFAULT_LOG_PATH, LogEntry, LogError, RecordedInputs, ResultLog};
pub use storage::{InMemoryStorage, LocalStorage, Storage, StorageError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{ProcessOutcome, ResultProcessor};
    pub use crate::result_log::{RecordedInputs, ResultLog};
    pub use scorelog_core::{ResultValue, TestType};
}
