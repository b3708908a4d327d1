//! Request and response types shared by the executor and the predicates

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::common::Result;

/// HTTP methods the suite issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[serde(alias = "get")]
    Get,
    #[serde(alias = "put")]
    Put,
    #[serde(alias = "post")]
    Post,
    #[serde(alias = "delete")]
    Delete,
}

impl Method {
    /// Upper-case method name, as written to the `Request Type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully received HTTP response
///
/// Built once per request and never mutated. The body is parsed as JSON up
/// front; the outcome is kept as data so predicates can assert on it.
#[derive(Debug, Clone)]
pub struct Response {
    /// Numeric status code
    pub status_code: u16,
    /// Header values keyed by lower-cased name; repeated headers are joined with ", "
    pub headers: HashMap<String, String>,
    /// Raw body text
    pub body_text: String,
    /// Parsed body, if it is valid JSON
    pub body_json: Option<Value>,
    /// Parser message when the body is not valid JSON
    pub json_error: Option<String>,
    /// Time from dispatch until the response head arrived
    pub elapsed_ms: f64,
}

impl Response {
    /// Build a response, attempting the JSON parse once
    pub fn new(
        status_code: u16,
        headers: HashMap<String, String>,
        body_text: String,
        elapsed_ms: f64,
    ) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();

        let (body_json, json_error) = match serde_json::from_str::<Value>(&body_text) {
            Ok(value) => (Some(value), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Self {
            status_code,
            headers,
            body_text,
            body_json,
            json_error,
            elapsed_ms,
        }
    }

    /// Header lookup by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The parsed JSON body, or the reason it could not be parsed
    pub fn json(&self) -> std::result::Result<&Value, &str> {
        match (&self.body_json, &self.json_error) {
            (Some(value), _) => Ok(value),
            (None, Some(reason)) => Err(reason.as_str()),
            (None, None) => Err("body was not parsed"),
        }
    }

    /// Decode the body into a typed resource
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body_text)?)
    }
}
