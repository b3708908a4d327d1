//! Suite definition types
//!
//! Defines the data structures for deserializing YAML suite files. The
//! built-in suite is expressed with the same types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::case::TestCase;
use super::predicate::Predicate;
use crate::common::{Error, Result};
use crate::http::{resolve_url, Method, PostPayload};

/// A named, ordered list of cases
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SuiteDefinition {
    /// Name of the suite
    pub name: String,
    /// Optional description of what the suite covers
    #[serde(default)]
    pub description: Option<String>,
    /// Cases in execution order
    pub cases: Vec<CaseDefinition>,
}

/// A case before its path is resolved against a base URL
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CaseDefinition {
    /// Name written to the result log
    pub name: String,
    /// HTTP method
    pub method: Method,
    /// Endpoint path, e.g. `/posts/1`
    pub path: String,
    /// Optional JSON body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<PostPayload>,
    /// Conditions checked against the response
    #[serde(default)]
    pub expect: Vec<Predicate>,
}

impl CaseDefinition {
    pub fn new(name: &str, method: Method, path: &str) -> Self {
        Self {
            name: name.to_string(),
            method,
            path: path.to_string(),
            body: None,
            expect: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: PostPayload) -> Self {
        self.body = Some(body);
        self
    }

    pub fn expect(mut self, predicate: Predicate) -> Self {
        self.expect.push(predicate);
        self
    }

    /// Bind to a base URL
    pub fn resolve(&self, base_url: &str) -> Result<TestCase> {
        Ok(TestCase {
            name: self.name.clone(),
            method: self.method,
            target: resolve_url(base_url, &self.path)?,
            body: self.body.clone(),
            predicates: self.expect.clone(),
        })
    }
}

impl SuiteDefinition {
    /// Load a suite from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Parse a suite from YAML text
    pub fn parse(content: &str) -> Result<Self> {
        let suite: SuiteDefinition = serde_yaml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse suite: {}", e)))?;
        suite.validate()?;
        Ok(suite)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for case in &self.cases {
            if case.name.trim().is_empty() {
                return Err(Error::Config("Case with an empty name".to_string()));
            }
            if !seen.insert(case.name.as_str()) {
                return Err(Error::Config(format!(
                    "Duplicate case name '{}'",
                    case.name
                )));
            }
        }
        Ok(())
    }

    /// Keep only cases whose name contains `pattern`
    pub fn filtered(mut self, pattern: &str) -> Self {
        self.cases.retain(|case| case.name.contains(pattern));
        self
    }

    /// Find a case by exact name
    pub fn case(&self, name: &str) -> Option<&CaseDefinition> {
        self.cases.iter().find(|case| case.name == name)
    }

    /// Bind every case to a base URL
    pub fn resolve(&self, base_url: &str) -> Result<Vec<TestCase>> {
        self.cases.iter().map(|case| case.resolve(base_url)).collect()
    }
}
