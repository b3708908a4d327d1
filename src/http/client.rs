//! Request executor
//!
//! Issues exactly one request per call. There is no retry and no explicit
//! timeout; whatever reqwest does by default applies.

use std::collections::HashMap;
use std::time::Instant;

use reqwest::header::HeaderMap;
use reqwest::Url;

use super::posts::PostPayload;
use super::types::{Method, Response};
use crate::common::{Error, Result};

/// Join a base URL and an endpoint path into an absolute target URL
///
/// The base may carry its own path prefix; it is kept.
pub fn resolve_url(base_url: &str, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let url = Url::parse(&joined).map_err(|e| Error::invalid_url(&joined, &e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::invalid_url(
            &joined,
            &format!("unsupported scheme '{}'", other),
        )),
    }
}

/// Performs the network call for a test case
pub struct RequestExecutor {
    client: reqwest::Client,
}

impl RequestExecutor {
    /// Create an executor with a default reqwest client
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("posts-contract/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Send one request and collect the full response
    ///
    /// Transport errors are returned as `Error::Http`. Any status code,
    /// including 4xx and 5xx, is a successful execution.
    pub async fn execute(
        &self,
        method: Method,
        url: &Url,
        body: Option<&PostPayload>,
    ) -> Result<Response> {
        let mut request = self.client.request(method.into(), url.clone());
        if let Some(payload) = body {
            request = request.json(payload);
        }

        tracing::debug!(%method, %url, has_body = body.is_some(), "sending request");

        let started = Instant::now();
        let response = request.send().await?;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        let status_code = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body_text = response.text().await?;

        tracing::debug!(
            %method,
            %url,
            status = status_code,
            elapsed_ms,
            bytes = body_text.len(),
            "received response"
        );

        Ok(Response::new(status_code, headers, body_text, elapsed_ms))
    }
}

fn collect_headers(map: &HeaderMap) -> HashMap<String, String> {
    let mut headers: HashMap<String, String> = HashMap::new();
    for (name, value) in map {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        headers
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    headers
}
