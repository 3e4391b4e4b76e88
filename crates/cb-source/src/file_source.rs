//! JSON file comment source

use crate::payload::parse_comment_list;
use cb_core::comment::Comment;
use cb_core::source::CommentSource;
use cb_core::{BoardError, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Source reading the mock server's data file
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CommentSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn fetch(&self) -> Result<Vec<Comment>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            let reason = if e.kind() == std::io::ErrorKind::NotFound {
                format!("{} does not exist", self.path.display())
            } else {
                format!("failed to read {}: {}", self.path.display(), e)
            };
            BoardError::source_unavailable(self.name(), reason)
        })?;

        let comments = parse_comment_list(&content).map_err(|e| {
            BoardError::source_unavailable(
                self.name(),
                format!("{} is not a comment list: {}", self.path.display(), e),
            )
        })?;

        debug!("Read {} comments from {:?}", comments.len(), self.path);
        Ok(comments)
    }
}
