//! Posts contract - HTTP contract tests for a JSONPlaceholder-style API
//!
//! This library provides a request executor, a predicate-based harness that
//! logs one CSV row per case, and the built-in posts suite.

pub mod cli;
pub mod commands;
pub mod common;
pub mod http;
pub mod testing;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use http::{Method, Post, PostPayload, RequestExecutor, Response};
pub use testing::{Harness, Predicate, ResultLog, TestCase, Verdict};
