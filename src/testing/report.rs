//! CSV result log
//!
//! One row per executed case, columns `Request Type, Test, Response Status,
//! Result`. The file is opened in append mode for every row and closed again
//! before `append` returns, so rows already on disk survive any later failure.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::common::{Error, Result};
use crate::http::Method;

/// Column names, written once when the log file starts out empty
pub const CSV_HEADER: [&str; 4] = ["Request Type", "Test", "Response Status", "Result"];

/// Aggregate outcome of one case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "Pass",
            Verdict::Fail => "Fail",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One row of the result log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub request_type: Method,
    pub test_name: String,
    pub response_status: u16,
    pub result: Verdict,
}

impl ResultRecord {
    /// Render as a CSV line including the terminator
    pub fn to_csv_row(&self) -> String {
        csv_line(&[
            self.request_type.as_str(),
            &self.test_name,
            &self.response_status.to_string(),
            self.result.as_str(),
        ])
    }
}

/// Append-only CSV log of case results
#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file (with a header row) if needed
    ///
    /// Existing content is never rewritten.
    pub fn append(&self, record: &ResultRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.log_error(e))?;

        let starts_empty = file.metadata().map_err(|e| self.log_error(e))?.len() == 0;

        let mut rows = String::new();
        if starts_empty {
            rows.push_str(&csv_line(&CSV_HEADER));
        }
        rows.push_str(&record.to_csv_row());

        file.write_all(rows.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| self.log_error(e))?;

        tracing::trace!(
            path = %self.path.display(),
            test = %record.test_name,
            "appended result row"
        );
        Ok(())
    }

    fn log_error(&self, e: std::io::Error) -> Error {
        Error::ResultLog {
            path: self.path.display().to_string(),
            error: e.to_string(),
        }
    }
}

fn csv_line(fields: &[&str]) -> String {
    let mut line = fields
        .iter()
        .map(|field| csv_field(field))
        .collect::<Vec<_>>()
        .join(",");
    line.push_str("\r\n");
    line
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
