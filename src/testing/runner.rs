//! Suite runner
//!
//! Runs cases one after another through the harness and prints progress.
//! A failing or erroring case never stops the remaining ones.

use colored::Colorize;

use super::case::TestCase;
use super::harness::Harness;
use crate::common::Error;
use crate::http::Method;

/// How a single case ended
#[derive(Debug, Clone, PartialEq)]
pub enum CaseStatus {
    Passed,
    /// A predicate did not hold; carries the failure message
    Failed(String),
    /// The case could not be judged (network, log file, ...)
    Errored(String),
}

/// Result of one case in a suite run
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub name: String,
    pub method: Method,
    pub status: CaseStatus,
}

/// Result of a suite run
#[derive(Debug, Default)]
pub struct SuiteSummary {
    pub name: String,
    pub results: Vec<CaseResult>,
}

impl SuiteSummary {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::Failed(_)))
    }

    pub fn errored(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::Errored(_)))
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    /// `METHOD name` of every case that did not pass, in run order
    pub fn unsuccessful(&self) -> Vec<String> {
        self.results
            .iter()
            .filter(|r| r.status != CaseStatus::Passed)
            .map(|r| format!("{} {}", r.method, r.name))
            .collect()
    }

    fn count(&self, pred: impl Fn(&CaseStatus) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.status)).count()
    }
}

/// Run every case in order
pub async fn run_suite(
    harness: &Harness,
    name: &str,
    cases: &[TestCase],
    verbose: bool,
) -> SuiteSummary {
    println!(
        "\n{} {} ({} cases)",
        "Running Suite:".blue().bold(),
        name.white().bold(),
        cases.len()
    );
    println!(
        "  {}",
        format!("results -> {}", harness.log().path().display()).dimmed()
    );
    println!();

    let mut summary = SuiteSummary {
        name: name.to_string(),
        results: Vec::with_capacity(cases.len()),
    };

    for case in cases {
        let label = format!("{} {}", case.method, case.name);

        let status = match harness.run_case(case).await {
            Ok(report) => {
                println!(
                    "  {} {} {}",
                    "✓".green(),
                    label,
                    format!(
                        "({} in {:.0} ms)",
                        report.record.response_status, report.response.elapsed_ms
                    )
                    .dimmed()
                );
                if verbose {
                    for check in &report.checks {
                        println!("      {} {}", "·".dimmed(), check.condition.dimmed());
                    }
                }
                CaseStatus::Passed
            }
            Err(Error::AssertionFailed {
                condition, detail, ..
            }) => {
                println!("  {} {}", "✗".red(), label);
                println!("      {} {}", condition.red(), format!("({})", detail).dimmed());
                CaseStatus::Failed(format!("{}: {}", condition, detail))
            }
            Err(e) => {
                println!("  {} {}", "!".yellow().bold(), label);
                println!("      {}", e.to_string().yellow());
                CaseStatus::Errored(e.to_string())
            }
        };

        summary.results.push(CaseResult {
            name: case.name.clone(),
            method: case.method,
            status,
        });
    }

    print_summary(&summary);
    summary
}

fn print_summary(summary: &SuiteSummary) {
    let counts = format!(
        "{} passed, {} failed, {} errored",
        summary.passed(),
        summary.failed(),
        summary.errored()
    );

    if summary.all_passed() {
        println!("\n{} {}\n", "✓".green().bold(), counts.green().bold());
    } else {
        println!("\n{} {}", "✗".red().bold(), counts.red().bold());
        for label in summary.unsuccessful() {
            println!("  {} {}", "-".red(), label);
        }
        println!();
    }
}
