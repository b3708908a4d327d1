//! CLI command definitions
//!
//! Defines the clap commands for the contract runner.

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run a contract suite against the posts service
    Run {
        #[command(flatten)]
        source: SuiteSource,

        /// Base URL of the service (overrides the config file)
        #[arg(long)]
        base_url: Option<String>,

        /// CSV file to append results to (overrides the config file)
        #[arg(long)]
        log: Option<PathBuf>,

        /// Only run cases whose name contains this text
        #[arg(long, short)]
        filter: Option<String>,
    },

    /// List the cases in a suite without running them
    List {
        #[command(flatten)]
        source: SuiteSource,
    },
}

/// Where cases and settings come from
#[derive(Args)]
pub struct SuiteSource {
    /// YAML suite file (default: the built-in posts suite)
    #[arg(long)]
    pub suite: Option<PathBuf>,

    /// Configuration file (default: ./contract.toml, then the user config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
