//! Process command handler

use crate::error::CliError;
use crate::parse_range;
use scorelog::{ProcessOutcome, ResultProcessor, ScorelogConfig};
use tracing::info;

pub fn run_process(
    config: &ScorelogConfig,
    range: &str,
    test_type: &str,
    seed: Option<u64>,
) -> Result<ProcessOutcome, CliError> {
    let candidates = parse_range(range);
    if candidates.is_empty() {
        return Err(CliError::InvalidInput(
            "--range needs at least one candidate".to_string(),
        ));
    }

    let mut builder = ResultProcessor::from_config(config);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let mut processor = builder.build()?;
    info!("Using log {}", processor.log().path().display());

    let outcome = processor.process(&candidates, test_type)?;

    println!("{}", outcome);
    println!();
    if outcome.recorded {
        println!("Combined score: {}", outcome.score);
    } else {
        println!("Combined score: {} (already logged)", outcome.score);
    }

    Ok(outcome)
}
