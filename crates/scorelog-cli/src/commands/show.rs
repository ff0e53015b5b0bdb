//! Show command handler

use crate::error::CliError;
use scorelog::{LocalStorage, ResultLog, ScorelogConfig};
use std::sync::Arc;

pub fn run_show(config: &ScorelogConfig) -> Result<usize, CliError> {
    let storage = Arc::new(LocalStorage::from_config(config));
    let log = ResultLog::open(storage, &config.log_path)?;

    if log.is_empty() {
        println!("No scores logged yet in {}", log.path().display());
        return Ok(0);
    }

    println!("{} score(s) in {}:", log.len(), log.path().display());
    for entry in log.entries() {
        println!("  {:>6}  {}", entry.key, entry.inputs);
    }

    Ok(log.len())
}
