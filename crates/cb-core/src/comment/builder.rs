//! Comment builder for fluent API

use super::model::{Author, Comment};
use crate::error::{BoardError, Result};
use crate::types::CommentId;
use chrono::{DateTime, Utc};

/// Builder for creating comments with fluent API
pub struct CommentBuilder {
    author: Author,
    id: Option<CommentId>,
    text: Option<String>,
    created_at: Option<DateTime<Utc>>,
    like_count: u64,
}

impl CommentBuilder {
    /// Create a new builder for a comment by `author`
    pub fn new(author: Author) -> Self {
        Self {
            author,
            id: None,
            text: None,
            created_at: None,
            like_count: 0,
        }
    }

    /// Use a specific id instead of a generated one
    pub fn id(mut self, id: impl Into<CommentId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the comment text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the creation time (defaults to now)
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set the like count (defaults to zero)
    pub fn likes(mut self, like_count: u64) -> Self {
        self.like_count = like_count;
        self
    }

    /// Build the comment
    pub fn build(self) -> Result<Comment> {
        let text = self.text.ok_or_else(|| {
            BoardError::Validation("Comment content is required".to_string())
        })?;

        if text.trim().is_empty() {
            return Err(BoardError::Validation(
                "Comment content cannot be empty".to_string(),
            ));
        }

        Ok(Comment {
            id: self.id.unwrap_or_default(),
            author: self.author,
            text,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            like_count: self.like_count,
        })
    }
}
