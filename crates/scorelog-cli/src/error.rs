//! Error types for scorelog-cli

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Scorelog(#[from] scorelog::ScorelogError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<scorelog::LogError> for CliError {
    fn from(err: scorelog::LogError) -> Self {
        CliError::Scorelog(err.into())
    }
}
