//! Comment list sources
//!
//! A source provides the initial comment sequence. The store does not care
//! whether it comes from a built-in seed, a file or a remote endpoint.

use crate::comment::builder::CommentBuilder;
use crate::comment::model::{timestamp, Author, Comment};
use crate::error::Result;
use chrono::Utc;

/// Trait for comment list providers
pub trait CommentSource {
    /// Short name used in logs and error messages
    fn name(&self) -> &str;

    /// Fetch the full comment list
    fn fetch(&self) -> Result<Vec<Comment>>;
}

/// Source backed by a fixed list
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    comments: Vec<Comment>,
}

impl StaticSource {
    /// Create a source that always returns `comments`
    pub fn new(comments: Vec<Comment>) -> Self {
        Self { comments }
    }

    /// The built-in seed list
    pub fn seed() -> Result<Self> {
        let seeded = [
            (3u64, Author::new("13258165", "Jay Chou", ""), "Oh, not bad", "10-18 08:15", 100),
            (
                2,
                Author::new("36080105", "John Smith", ""),
                "I have searched for you thousands of times from sunrise to dusk",
                "11-13 11:29",
                88,
            ),
            (
                1,
                seed_user(),
                "Learn front-end and come to Dark Horse",
                "10-19 09:00",
                66,
            ),
        ];

        let comments = seeded
            .into_iter()
            .map(|(id, author, text, ctime, likes)| {
                CommentBuilder::new(author)
                    .id(id)
                    .text(text)
                    .created_at(timestamp::parse(ctime).unwrap_or_else(Utc::now))
                    .likes(likes)
                    .build()
            })
            .collect::<Result<Vec<_>>>()
            .map_err(|e| e.with_context("Failed to build seed comments"))?;

        Ok(Self::new(comments))
    }
}

/// The identity that authored the last seed comment
pub fn seed_user() -> Author {
    Author::new("30009257", "Dark Horse Front End", "images/bozai.png")
}

impl CommentSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self) -> Result<Vec<Comment>> {
        Ok(self.comments.clone())
    }
}

/// Test doubles shared by the crate's unit tests
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::BoardError;

    /// Source that always fails, for exercising the unavailable state
    pub(crate) struct FailingSource {
        reason: String,
    }

    impl FailingSource {
        pub(crate) fn new(reason: impl Into<String>) -> Self {
            Self {
                reason: reason.into(),
            }
        }
    }

    impl CommentSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        fn fetch(&self) -> Result<Vec<Comment>> {
            Err(BoardError::source_unavailable(self.name(), &self.reason))
        }
    }
}
