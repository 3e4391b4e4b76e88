//! Sort modes for the comment list

use super::model::Comment;
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering criterion applied to the comment list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Most liked first ("Hottest" tab)
    #[default]
    #[serde(rename = "hot")]
    ByLikesDescending,
    /// Newest first ("Latest" tab)
    #[serde(rename = "time")]
    ByCreatedAtDescending,
}

impl SortMode {
    /// All modes in tab order
    pub const ALL: [SortMode; 2] = [SortMode::ByLikesDescending, SortMode::ByCreatedAtDescending];

    /// Tab type key ("hot"/"time")
    pub fn key(&self) -> &'static str {
        match self {
            SortMode::ByLikesDescending => "hot",
            SortMode::ByCreatedAtDescending => "time",
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::ByLikesDescending => "Hottest",
            SortMode::ByCreatedAtDescending => "Latest",
        }
    }

    /// The other tab
    pub fn toggle(&self) -> Self {
        match self {
            SortMode::ByLikesDescending => SortMode::ByCreatedAtDescending,
            SortMode::ByCreatedAtDescending => SortMode::ByLikesDescending,
        }
    }

    /// Reorder comments in place. Ties keep their relative order.
    pub fn apply(&self, comments: &mut [Comment]) {
        match self {
            SortMode::ByLikesDescending => {
                comments.sort_by(|a, b| b.like_count.cmp(&a.like_count))
            }
            SortMode::ByCreatedAtDescending => {
                comments.sort_by(|a, b| b.created_at.cmp(&a.created_at))
            }
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for SortMode {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hot" | "hottest" | "likes" => Ok(SortMode::ByLikesDescending),
            "time" | "latest" | "new" => Ok(SortMode::ByCreatedAtDescending),
            other => Err(BoardError::Validation(format!(
                "Unknown sort mode '{}' (expected 'hot' or 'time')",
                other
            ))),
        }
    }
}
