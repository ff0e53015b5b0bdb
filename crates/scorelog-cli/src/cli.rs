//! Command line definition

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scorelog")]
#[command(about = "Combine results into a score and log each distinct score once", long_about = None)]
pub struct Cli {
    /// Config file path (JSON, or TOML with a .toml extension)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Log document path (defaults to data/log.json)
    #[arg(long, global = true)]
    pub log_path: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Combine a random candidate with a test type constant and log it
    Process {
        /// Comma separated candidates, e.g. 1,1,5,12
        #[arg(long, short = 'r')]
        range: String,

        /// Test type label (easy, medium, hard)
        #[arg(long, short = 't')]
        test_type: String,

        /// Seed for candidate selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show every logged score
    Show,
    /// List recognised test types and their constants
    Types,
}
