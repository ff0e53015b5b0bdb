//! scorelog CLI library

pub mod cli;
pub mod commands;
pub mod error;

use scorelog::ResultValue;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a comma separated list of candidates.
///
/// Tokens that are not integers are kept as reals or strings so that the
/// library's validation reports them.
pub fn parse_range(input: &str) -> Vec<ResultValue> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            if let Ok(v) = token.parse::<i64>() {
                ResultValue::Int(v)
            } else if let Ok(v) = token.parse::<f64>() {
                ResultValue::Real(v)
            } else {
                ResultValue::Text(token.to_string())
            }
        })
        .collect()
}

/// Install the global tracing subscriber, writing to stderr
pub fn init_tracing(log_level: &str) {
    let filter = format!("scorelog={0},scorelog_core={0},scorelog_cli={0}", log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
