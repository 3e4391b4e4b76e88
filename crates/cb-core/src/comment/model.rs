//! Comment data models

use crate::types::{CommentId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display format used for comment timestamps ("MM-DD HH:MM")
pub const DISPLAY_TIME_FORMAT: &str = "%m-%d %H:%M";

/// Author of a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// User identifier
    #[serde(rename = "uid")]
    pub id: UserId,
    /// Name shown next to the comment
    #[serde(rename = "uname")]
    pub display_name: String,
    /// Avatar reference (URL or asset path, may be empty)
    #[serde(default)]
    pub avatar: String,
}

impl Author {
    /// Create a new author
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::from_string(id),
            display_name: display_name.into(),
            avatar: avatar.into(),
        }
    }

    /// First character of the display name, used when there is no avatar
    pub fn initial(&self) -> char {
        self.display_name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// The local identity of the person using the list
///
/// Only used to decide whether a comment may be deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(Author);

impl CurrentUser {
    /// Create the current user from an author identity
    pub fn new(author: Author) -> Self {
        Self(author)
    }

    /// User identifier
    pub fn id(&self) -> &UserId {
        &self.0.id
    }

    /// The identity used when publishing comments
    pub fn as_author(&self) -> &Author {
        &self.0
    }
}

/// A single entry in the comment list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    #[serde(rename = "rpid")]
    pub id: CommentId,
    /// Who wrote it
    #[serde(rename = "user")]
    pub author: Author,
    /// Comment text
    #[serde(rename = "content")]
    pub text: String,
    /// When the comment was created
    #[serde(rename = "ctime", with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Number of likes
    #[serde(rename = "like", default)]
    pub like_count: u64,
}

impl Comment {
    /// Check whether the given user wrote this comment
    pub fn is_authored_by(&self, user: &CurrentUser) -> bool {
        &self.author.id == user.id()
    }

    /// Creation time formatted for display
    pub fn display_time(&self) -> String {
        self.created_at.format(DISPLAY_TIME_FORMAT).to_string()
    }
}

/// Serde adapter for comment timestamps.
///
/// Writes RFC 3339. Reads RFC 3339 or the mock endpoint's "MM-DD HH:MM"
/// form, which carries no year and is taken as the current year in UTC.
pub mod timestamp {
    use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Parse a timestamp in any accepted form
    pub fn parse(s: &str) -> Option<DateTime<Utc>> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        // "02-29" only exists in leap years, so walk back until the date is valid
        let current = Utc::now().year();
        (0..8)
            .map(|back| current - back)
            .find_map(|year| {
                NaiveDateTime::parse_from_str(&format!("{}-{}", year, s), "%Y-%m-%d %H:%M").ok()
            })
            .map(|naive| naive.and_utc())
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid comment time: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    fn create_test_comment() -> Comment {
        Comment {
            id: CommentId::from(3u64),
            author: Author::new("13258165", "Jay Chou", ""),
            text: "Oh, not bad".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 10, 18, 8, 15, 0).unwrap(),
            like_count: 100,
        }
    }

    #[test]
    fn test_is_authored_by() {
        let comment = create_test_comment();
        let author = CurrentUser::new(Author::new("13258165", "Jay Chou", ""));
        let other = CurrentUser::new(Author::new("30009257", "Someone Else", ""));

        assert!(comment.is_authored_by(&author));
        assert!(!comment.is_authored_by(&other));
    }

    #[test]
    fn test_display_time() {
        assert_eq!(create_test_comment().display_time(), "10-18 08:15");
    }

    #[test]
    fn test_author_initial() {
        assert_eq!(Author::new("1", "jay", "").initial(), 'J');
        assert_eq!(Author::new("1", "", "").initial(), '?');
    }

    #[test]
    fn test_parse_mock_endpoint_record() {
        let json = r#"{
            "rpid": 2,
            "user": { "uid": "36080105", "avatar": "", "uname": "John Smith" },
            "content": "I have searched for you thousands of times",
            "ctime": "11-13 11:29",
            "like": 88
        }"#;

        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.id, CommentId::from(2u64));
        assert_eq!(comment.author.display_name, "John Smith");
        assert_eq!(comment.like_count, 88);
        assert_eq!(comment.created_at.month(), 11);
        assert_eq!(comment.created_at.day(), 13);
        assert_eq!(comment.created_at.hour(), 11);
        assert_eq!(comment.created_at.minute(), 29);
    }

    #[test]
    fn test_parse_leap_day_without_year() {
        let parsed = timestamp::parse("02-29 10:00").unwrap();
        assert_eq!((parsed.month(), parsed.day()), (2, 29));
        assert_eq!((parsed.hour(), parsed.minute()), (10, 0));
        assert!(parsed.year() <= Utc::now().year());
        assert!(chrono::NaiveDate::from_ymd_opt(parsed.year(), 2, 29).is_some());

        assert!(timestamp::parse("02-30 10:00").is_none());
    }

    #[test]
    fn test_parse_rfc3339_time() {
        let parsed = timestamp::parse("2024-10-19T09:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 10, 19, 9, 0, 0).unwrap());
        assert!(timestamp::parse("yesterday").is_none());
    }

    #[test]
    fn test_negative_likes_rejected() {
        let json = r#"{"rpid": 1, "user": {"uid": "1", "uname": "a"}, "content": "x", "ctime": "10-19 09:00", "like": -1}"#;
        assert!(serde_json::from_str::<Comment>(json).is_err());
    }

    #[test]
    fn test_comment_serialization() {
        let comment = create_test_comment();
        let json = serde_json::to_string(&comment).unwrap();
        assert!(json.contains("\"rpid\":\"3\""));
        let comment2: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(comment, comment2);
    }
}
