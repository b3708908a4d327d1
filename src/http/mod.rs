//! HTTP plumbing: the request executor and the typed posts payloads

mod client;
pub mod posts;
pub mod types;

pub use client::{resolve_url, RequestExecutor};
pub use posts::{Post, PostPayload};
pub use types::{Method, Response};
