//! CLI command handlers

pub mod process;
pub mod show;
pub mod types;

pub use process::run_process;
pub use show::run_show;
pub use types::run_types;
