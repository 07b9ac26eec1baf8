//! Data Transfer Objects - request/response types for the posts API.
//!
//! Each request type carries its own precondition check so the rules live
//! with the shape they guard. A field sent as an empty string counts as not
//! provided, the same as omitting it; an empty tag list counts as provided.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A request precondition failed. Always a client error.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

fn provided(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

/// Request to create a post.
///
/// `title` and `content` are required but optional here so that a missing
/// field reaches [`validate`](Self::validate) and gets the canonical error
/// message instead of dying inside the JSON deserializer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !provided(&self.title) || !provided(&self.content) {
            return Err(ValidationError(
                "Title and content are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Request to partially update a post. At least one field must be provided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdatePostRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !provided(&self.title)
            && !provided(&self.content)
            && !provided(&self.category)
            && self.tags.is_none()
        {
            return Err(ValidationError(
                "At least one field must be provided to update.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Query string for `GET /posts/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: Option<String>,
}

impl SearchQuery {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !provided(&self.term) {
            return Err(ValidationError("Search term is required".to_string()));
        }
        Ok(())
    }
}

/// A post as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: String,
}

/// Confirmation body attached to a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
