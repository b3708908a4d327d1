//! Assertion-and-report harness
//!
//! Runs a single case: one request, every predicate evaluated, one log row,
//! then the first failing predicate (if any) is returned as the error.

use super::case::TestCase;
use super::report::{ResultLog, ResultRecord, Verdict};
use crate::common::{Error, Result};
use crate::http::{RequestExecutor, Response};

/// Outcome of one predicate
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// Predicate description
    pub condition: String,
    /// `Err` carries what was observed instead
    pub outcome: std::result::Result<(), String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Everything known about a case that passed
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub record: ResultRecord,
    pub checks: Vec<CheckOutcome>,
    pub response: Response,
}

/// Executes cases and records their verdicts
pub struct Harness {
    executor: RequestExecutor,
    log: ResultLog,
}

impl Harness {
    pub fn new(executor: RequestExecutor, log: ResultLog) -> Self {
        Self { executor, log }
    }

    pub fn log(&self) -> &ResultLog {
        &self.log
    }

    /// Execute a case and judge its response
    ///
    /// Transport errors propagate before anything is logged. Otherwise exactly
    /// one row is appended, and only then is a failed predicate returned as
    /// `Error::AssertionFailed`.
    pub async fn run_case(&self, case: &TestCase) -> Result<CaseReport> {
        let response = self
            .executor
            .execute(case.method, &case.target, case.body.as_ref())
            .await?;
        self.judge(case, response)
    }

    /// Evaluate, log and verify an already received response
    pub fn judge(&self, case: &TestCase, response: Response) -> Result<CaseReport> {
        let checks: Vec<CheckOutcome> = case
            .predicates
            .iter()
            .map(|predicate| CheckOutcome {
                condition: predicate.to_string(),
                outcome: predicate.check(&response),
            })
            .collect();

        let result = if checks.iter().all(CheckOutcome::passed) {
            Verdict::Pass
        } else {
            Verdict::Fail
        };

        let record = ResultRecord {
            request_type: case.method,
            test_name: case.name.clone(),
            response_status: response.status_code,
            result,
        };
        self.log.append(&record)?;

        tracing::info!(
            test = %case.name,
            method = %case.method,
            status = response.status_code,
            verdict = %result,
            "case finished"
        );

        for check in &checks {
            if let Err(detail) = &check.outcome {
                tracing::warn!(
                    test = %case.name,
                    condition = %check.condition,
                    %detail,
                    "condition not met"
                );
                return Err(Error::assertion_failed(&case.name, &check.condition, detail));
            }
        }

        Ok(CaseReport {
            record,
            checks,
            response,
        })
    }
}
