//! Comment list payload parsing

use cb_core::comment::Comment;
use cb_core::Result;
use serde::Deserialize;

/// json-server data file layout: `{ "list": [...] }`
#[derive(Deserialize)]
struct Database {
    list: Vec<Comment>,
}

/// Parse a comment list from JSON text
///
/// Accepts the `GET /list` response (a bare array) or the data file.
pub fn parse_comment_list(body: &str) -> Result<Vec<Comment>> {
    if body.trim_start().starts_with('{') {
        let db: Database = serde_json::from_str(body)?;
        Ok(db.list)
    } else {
        Ok(serde_json::from_str(body)?)
    }
}
