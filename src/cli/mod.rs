//! CLI command handling
//!
//! Resolves configuration and suite, then hands off to the runner.

use colored::Colorize;

use crate::commands::{Commands, SuiteSource};
use crate::common::config::Config;
use crate::common::{Error, Result};
use crate::http::RequestExecutor;
use crate::testing::{self, Harness, ResultLog, SuiteDefinition};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands, verbose: bool) -> Result<()> {
    match command {
        Commands::Run {
            source,
            base_url,
            log,
            filter,
        } => {
            let (mut config, suite) = load(&source)?;
            if let Some(base_url) = base_url {
                config.base_url = base_url;
            }
            if let Some(log) = log {
                config.results_path = log;
            }

            let suite = match filter {
                Some(pattern) => suite.filtered(&pattern),
                None => suite,
            };
            if suite.cases.is_empty() {
                return Err(Error::Config("No cases selected".to_string()));
            }

            let cases = suite.resolve(&config.base_url)?;
            tracing::debug!(
                base_url = %config.base_url,
                results = %config.results_path.display(),
                cases = cases.len(),
                "starting run"
            );

            let harness = Harness::new(
                RequestExecutor::new()?,
                ResultLog::new(config.results_path.clone()),
            );
            let summary = testing::run_suite(&harness, &suite.name, &cases, verbose).await;

            if summary.all_passed() {
                Ok(())
            } else {
                Err(Error::SuiteFailed {
                    total: summary.total(),
                    failed: summary.failed(),
                    errored: summary.errored(),
                })
            }
        }

        Commands::List { source } => {
            let (config, suite) = load(&source)?;

            println!(
                "{} {}",
                suite.name.white().bold(),
                format!("({})", config.base_url).dimmed()
            );
            if let Some(desc) = &suite.description {
                println!("  {}", desc.dimmed());
            }
            for case in &suite.cases {
                println!(
                    "  {} {:<20} {}",
                    format!("{:<7}", case.method).cyan(),
                    case.path,
                    case.name
                );
            }
            Ok(())
        }
    }
}

fn load(source: &SuiteSource) -> Result<(Config, SuiteDefinition)> {
    let config = match &source.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let suite = match &source.suite {
        Some(path) => SuiteDefinition::load(path)?,
        None => testing::suite::builtin(config.elapsed_budget_ms),
    };
    Ok((config, suite))
}
