//! Checks evaluated against a response
//!
//! Each predicate renders a human-readable description through `Display`
//! and, when it does not hold, a short detail about what was observed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::http::{Post, Response};

/// Longest body excerpt quoted in a mismatch detail
const EXCERPT_LEN: usize = 120;

/// A single condition over a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Predicate {
    /// Status code equals `code`
    Status { code: u16 },
    /// Elapsed time is strictly below `millis`
    ElapsedBelow { millis: u64 },
    /// Header `name` (any case) has exactly `value`
    HeaderEquals { name: String, value: String },
    /// Raw body text is exactly `text`
    BodyEquals { text: String },
    /// Body parses as JSON
    BodyIsJson,
    /// Body is a JSON array whose elements are objects carrying every key
    EachItemHasKeys { keys: Vec<String> },
    /// Body is a JSON object carrying `field`
    FieldPresent { field: String },
    /// Body is a JSON object whose `field` equals `value`
    FieldEquals { field: String, value: Value },
    /// Body is a JSON object whose `field` is an integer greater than zero
    FieldPositiveInteger { field: String },
    /// Body decodes as a single post resource
    BodyIsPost,
}

impl Predicate {
    pub fn status(code: u16) -> Self {
        Self::Status { code }
    }

    pub fn elapsed_below(millis: u64) -> Self {
        Self::ElapsedBelow { millis }
    }

    pub fn header_equals(name: &str, value: &str) -> Self {
        Self::HeaderEquals {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn body_equals(text: &str) -> Self {
        Self::BodyEquals {
            text: text.to_string(),
        }
    }

    pub fn each_item_has_keys(keys: &[&str]) -> Self {
        Self::EachItemHasKeys {
            keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn field_present(field: &str) -> Self {
        Self::FieldPresent {
            field: field.to_string(),
        }
    }

    pub fn field_equals(field: &str, value: impl Into<Value>) -> Self {
        Self::FieldEquals {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn field_positive_integer(field: &str) -> Self {
        Self::FieldPositiveInteger {
            field: field.to_string(),
        }
    }

    /// Evaluate against a response
    ///
    /// `Ok(())` when the condition holds, otherwise a description of what
    /// was actually observed.
    pub fn check(&self, response: &Response) -> Result<(), String> {
        match self {
            Predicate::Status { code } => {
                if response.status_code == *code {
                    Ok(())
                } else {
                    Err(format!("got status {}", response.status_code))
                }
            }

            Predicate::ElapsedBelow { millis } => {
                if response.elapsed_ms < *millis as f64 {
                    Ok(())
                } else {
                    Err(format!("took {:.1} ms", response.elapsed_ms))
                }
            }

            Predicate::HeaderEquals { name, value } => match response.header(name) {
                Some(actual) if actual == value => Ok(()),
                Some(actual) => Err(format!("got '{}'", actual)),
                None => Err(format!("no {} header", name)),
            },

            Predicate::BodyEquals { text } => {
                if &response.body_text == text {
                    Ok(())
                } else {
                    Err(format!("got {:?}", excerpt(&response.body_text)))
                }
            }

            Predicate::BodyIsJson => response
                .json()
                .map(|_| ())
                .map_err(|reason| format!("body is not JSON: {}", reason)),

            Predicate::EachItemHasKeys { keys } => {
                let items = json_body(response)?
                    .as_array()
                    .ok_or_else(|| "body is not a JSON array".to_string())?;
                for (index, item) in items.iter().enumerate() {
                    let object = item
                        .as_object()
                        .ok_or_else(|| format!("item {} is not an object", index))?;
                    if let Some(missing) = keys.iter().find(|k| !object.contains_key(k.as_str())) {
                        return Err(format!("item {} has no '{}' key", index, missing));
                    }
                }
                Ok(())
            }

            Predicate::FieldPresent { field } => {
                json_object(response)?
                    .get(field)
                    .map(|_| ())
                    .ok_or_else(|| format!("no '{}' key", field))
            }

            Predicate::FieldEquals { field, value } => {
                match json_object(response)?.get(field) {
                    Some(actual) if actual == value => Ok(()),
                    Some(actual) => Err(format!("got {}", actual)),
                    None => Err(format!("no '{}' key", field)),
                }
            }

            Predicate::FieldPositiveInteger { field } => {
                match json_object(response)?.get(field) {
                    Some(actual) => match actual.as_u64() {
                        Some(n) if n > 0 => Ok(()),
                        _ => Err(format!("got {}", actual)),
                    },
                    None => Err(format!("no '{}' key", field)),
                }
            }

            Predicate::BodyIsPost => response
                .decode::<Post>()
                .map(|_| ())
                .map_err(|e| format!("body is not a post: {}", e)),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Status { code } => write!(f, "status is {}", code),
            Predicate::ElapsedBelow { millis } => {
                write!(f, "response time below {} ms", millis)
            }
            Predicate::HeaderEquals { name, value } => write!(f, "{} is '{}'", name, value),
            Predicate::BodyEquals { text } => write!(f, "body is exactly {:?}", text),
            Predicate::BodyIsJson => write!(f, "body is valid JSON"),
            Predicate::EachItemHasKeys { keys } => {
                write!(f, "every item has keys {}", keys.join(", "))
            }
            Predicate::FieldPresent { field } => write!(f, "body has '{}'", field),
            Predicate::FieldEquals { field, value } => write!(f, "'{}' equals {}", field, value),
            Predicate::FieldPositiveInteger { field } => {
                write!(f, "'{}' is a positive integer", field)
            }
            Predicate::BodyIsPost => write!(f, "body decodes as a post"),
        }
    }
}

fn json_body(response: &Response) -> Result<&Value, String> {
    response
        .json()
        .map_err(|reason| format!("body is not JSON: {}", reason))
}

fn json_object(response: &Response) -> Result<&Map<String, Value>, String> {
    json_body(response)?
        .as_object()
        .ok_or_else(|| "body is not a JSON object".to_string())
}

fn excerpt(text: &str) -> String {
    if text.chars().count() > EXCERPT_LEN {
        let cut: String = text.chars().take(EXCERPT_LEN).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
