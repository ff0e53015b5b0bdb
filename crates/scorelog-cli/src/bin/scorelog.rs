//! CLI for scorelog

use clap::Parser;
use scorelog::ScorelogConfig;
use scorelog_cli::cli::{Cli, Commands};
use scorelog_cli::{commands, error::CliError, init_tracing};
use tracing::debug;

fn load_config(cli: &Cli) -> Result<ScorelogConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => ScorelogConfig::load_from_file(path)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?,
        None => ScorelogConfig::default(),
    };

    // Override with CLI options
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone();
    }
    if let Some(log_path) = &cli.log_path {
        config.log_path = log_path.clone();
    }

    Ok(config)
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(&config.log_level);
    debug!("Configuration: {:?}", config);

    match &cli.command {
        Some(Commands::Process {
            range,
            test_type,
            seed,
        }) => {
            commands::run_process(&config, range, test_type, *seed)?;
        }
        Some(Commands::Show) => {
            commands::run_show(&config)?;
        }
        Some(Commands::Types) => {
            commands::run_types(&config)?;
        }
        None => {
            println!("scorelog: result combination with a deduplicated JSON log");
            println!("Use --help for more information");
        }
    }

    Ok(())
}
