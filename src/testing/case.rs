//! Executable test case definition

use reqwest::Url;

use super::predicate::Predicate;
use crate::http::{Method, PostPayload};

/// One request plus the conditions its response must satisfy
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    /// Name written to the `Test` column
    pub name: String,
    pub method: Method,
    /// Absolute URL the request is sent to
    pub target: Url,
    pub body: Option<PostPayload>,
    /// Evaluated in order; the first one that fails is the one reported
    pub predicates: Vec<Predicate>,
}

impl TestCase {
    pub fn new(name: &str, method: Method, target: Url) -> Self {
        Self {
            name: name.to_string(),
            method,
            target,
            body: None,
            predicates: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: PostPayload) -> Self {
        self.body = Some(body);
        self
    }

    pub fn expect(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }
}
