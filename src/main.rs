//! Posts contract runner
//!
//! Runs HTTP contract checks against a posts service and appends one
//! pass/fail row per case to a CSV log.

use clap::Parser;
use contract::common::logging;
use contract::{cli, commands::Commands};

#[derive(Parser)]
#[command(name = "contract", about = "HTTP contract tests for a posts API")]
#[command(version, long_about = None)]
struct Cli {
    /// Verbose output (also enables debug logging for this crate)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.verbose);

    if let Err(e) = cli::dispatch(cli.command, cli.verbose).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
