//! Types command handler

use crate::error::CliError;
use scorelog::ScorelogConfig;

pub fn run_types(config: &ScorelogConfig) -> Result<(), CliError> {
    println!("Recognised test types:");
    for (test_type, constant) in config.test_types.iter() {
        println!("  {:<8} {}", test_type, constant);
    }
    Ok(())
}
