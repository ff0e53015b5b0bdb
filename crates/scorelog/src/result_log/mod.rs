pub mod entry;
pub mod error;
pub mod log;

pub use entry::{LogEntry, RecordedInputs};
pub use error::{LogError, Result};
pub use log::{DEFAULT_LOG_PATH, ResultLog};
