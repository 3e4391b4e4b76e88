//! Comment sources for unit tests

use cb_core::comment::Comment;
use cb_core::source::{CommentSource, StaticSource};
use cb_core::{BoardError, Result};
use std::cell::Cell;

/// Source that always fails
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

/// Source that fails a number of times, then serves the seed list
pub(crate) struct FlakySource {
    failures_left: Cell<usize>,
    seed: StaticSource,
}

impl FlakySource {
    pub(crate) fn new(failures: usize) -> Self {
        Self {
            failures_left: Cell::new(failures),
            seed: StaticSource::seed().unwrap(),
        }
    }
}

impl CommentSource for FlakySource {
    fn name(&self) -> &str {
        "flaky"
    }

    fn fetch(&self) -> Result<Vec<Comment>> {
        let left = self.failures_left.get();
        if left > 0 {
            self.failures_left.set(left - 1);
            return Err(BoardError::source_unavailable(self.name(), "timed out"));
        }
        self.seed.fetch()
    }
}
