//! Error types for scorelog crate

use scorelog_core::{CoreError, ProcessingError, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorelogError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Log error: {0}")]
    Log(#[from] crate::result_log::LogError),

    #[error("Build error: {0}")]
    Build(String),
}

impl From<ValidationError> for ScorelogError {
    fn from(err: ValidationError) -> Self {
        ScorelogError::Core(err.into())
    }
}

impl From<ProcessingError> for ScorelogError {
    fn from(err: ProcessingError) -> Self {
        ScorelogError::Core(err.into())
    }
}

pub type Result<T> = std::result::Result<T, ScorelogError>;
