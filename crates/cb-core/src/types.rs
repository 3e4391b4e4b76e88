//! Core type definitions for comment-board

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a comment
///
/// The mock endpoint stores seeded comments with integer ids (`"rpid": 3`)
/// while locally published comments get a UUID v4. Both end up here as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl CommentId {
    /// Generate a new CommentId
    pub fn new() -> Self {
        CommentId(Uuid::new_v4().to_string())
    }

    /// Create a CommentId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        CommentId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<u64> for CommentId {
    fn from(n: u64) -> Self {
        CommentId(n.to_string())
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> Self {
        CommentId::from_string(s)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for CommentId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => CommentId::from(n),
            RawId::Text(s) => CommentId(s),
        })
    }
}

/// Identifier of a comment author
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Create a UserId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        UserId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_id_uniqueness() {
        let id1 = CommentId::new();
        let id2 = CommentId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_comment_id_from_number_or_string() {
        let numeric: CommentId = serde_json::from_str("3").unwrap();
        assert_eq!(numeric, CommentId::from_string("3"));

        let text: CommentId =
            serde_json::from_str("\"0b9c6a58-2f0c-4c39-9b0c-2a4f4bd0b0f1\"").unwrap();
        assert_eq!(text.as_str(), "0b9c6a58-2f0c-4c39-9b0c-2a4f4bd0b0f1");
    }

    #[test]
    fn test_comment_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&CommentId::from(7u64)).unwrap();
        assert_eq!(json, "\"7\"");
    }

    #[test]
    fn test_user_id_display() {
        let id = UserId::from_string("30009257");
        assert_eq!(id.to_string(), "30009257");
    }
}
