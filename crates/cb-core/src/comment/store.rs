//! Comment list store
//!
//! Holds the ordered comment sequence for one view session. Sorting is
//! destructive: it reorders the stored sequence, and later adds and deletes
//! act on the sorted order.

use super::builder::CommentBuilder;
use super::model::{Author, Comment, CurrentUser};
use super::sort::SortMode;
use super::validator::CommentValidator;
use crate::error::Result;
use crate::source::CommentSource;
use crate::types::CommentId;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Whether the initial list has been obtained
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing loaded yet
    #[default]
    Pending,
    /// The list was loaded
    Ready,
    /// The source failed; the list can be retried
    Unavailable(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, LoadState::Unavailable(_))
    }
}

/// Ordered, in-memory comment list
#[derive(Debug, Clone, Default)]
pub struct CommentListStore {
    comments: Vec<Comment>,
    sort_mode: SortMode,
    load_state: LoadState,
    validator: CommentValidator,
}

impl CommentListStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that validates new comments with `validator`
    pub fn with_validator(validator: CommentValidator) -> Self {
        Self {
            validator,
            ..Self::default()
        }
    }

    /// Replace the whole sequence
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    pub fn load(&mut self, initial: Vec<Comment>) {
        let mut seen = HashSet::with_capacity(initial.len());
        let mut comments = Vec::with_capacity(initial.len());

        for comment in initial {
            if seen.insert(comment.id.clone()) {
                comments.push(comment);
            } else {
                warn!("Dropping duplicate comment id {}", comment.id);
            }
        }

        debug!("Loaded {} comments", comments.len());
        self.comments = comments;
        self.load_state = LoadState::Ready;
    }

    /// Load from a source, recording failure instead of propagating it
    ///
    /// On failure the current sequence is kept.
    pub fn load_from(&mut self, source: &dyn CommentSource) -> &LoadState {
        match source.fetch() {
            Ok(comments) => {
                info!("Fetched {} comments from {}", comments.len(), source.name());
                self.load(comments);
            }
            Err(e) => {
                warn!("Comment list unavailable: {}", e);
                self.load_state = LoadState::Unavailable(e.to_string());
            }
        }
        &self.load_state
    }

    /// Remove the comment with `id`, if present
    pub fn delete(&mut self, id: &CommentId) -> Option<Comment> {
        let pos = self.comments.iter().position(|c| &c.id == id)?;
        let removed = self.comments.remove(pos);
        debug!("Deleted comment {}", id);
        Some(removed)
    }

    /// Append a new comment by `author` with zero likes
    ///
    /// Blank or over-long text is rejected and the store is left unchanged.
    pub fn add(&mut self, text: &str, author: &Author) -> Result<CommentId> {
        self.validator.validate_content(text)?;
        self.validator.validate_author(author)?;

        let mut id = CommentId::new();
        while self.contains(&id) {
            id = CommentId::new();
        }

        let comment = CommentBuilder::new(author.clone())
            .id(id.clone())
            .text(text)
            .build()?;

        self.comments.push(comment);
        debug!("Added comment {}", id);
        Ok(id)
    }

    /// Reorder the whole sequence and make `mode` the active mode
    pub fn sort(&mut self, mode: SortMode) {
        mode.apply(&mut self.comments);
        self.sort_mode = mode;
    }

    /// Active sort mode
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Current load state
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// All comments in their current order
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Get a comment by ID
    pub fn get(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.id == id)
    }

    /// Check whether a comment with `id` exists
    pub fn contains(&self, id: &CommentId) -> bool {
        self.get(id).is_some()
    }

    /// Whether `user` is allowed to delete the comment with `id`
    pub fn can_delete(&self, id: &CommentId, user: &CurrentUser) -> bool {
        self.get(id).is_some_and(|c| c.is_authored_by(user))
    }

    /// Get total comment count
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}
