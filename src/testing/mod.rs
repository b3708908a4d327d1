//! Contract test harness
//!
//! Cases are a single request plus an ordered list of predicates. The
//! harness runs one case at a time, appends one CSV row per case, and
//! reports the first condition that did not hold.

mod case;
mod config;
mod harness;
mod predicate;
mod report;
mod runner;
pub mod suite;

pub use case::TestCase;
pub use config::{CaseDefinition, SuiteDefinition};
pub use harness::{CaseReport, CheckOutcome, Harness};
pub use predicate::Predicate;
pub use report::{ResultLog, ResultRecord, Verdict, CSV_HEADER};
pub use runner::{run_suite, CaseResult, CaseStatus, SuiteSummary};
