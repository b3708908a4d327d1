//! Typed payloads for the posts resource

use serde::{Deserialize, Serialize};

/// Request body for `PUT /posts/{id}` and `POST /posts`
///
/// Only `title`, `body` and `userId` are accepted; absent fields are left out
/// of the serialized JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(
        default,
        rename = "userId",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<u64>,
}

impl PostPayload {
    /// Payload for updating an existing post
    pub fn update(title: &str, body: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            body: Some(body.to_string()),
            user_id: None,
        }
    }

    /// Payload for creating a post owned by `user_id`
    pub fn create(title: &str, body: &str, user_id: u64) -> Self {
        Self {
            title: Some(title.to_string()),
            body: Some(body.to_string()),
            user_id: Some(user_id),
        }
    }
}

/// A post as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(
        default,
        rename = "userId",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<u64>,
}
