//! Configuration management for comment-board

use crate::comment::model::{Author, CurrentUser};
use crate::comment::sort::SortMode;
use crate::comment::validator::{CommentValidator, MAX_COMMENT_LENGTH};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Project-local configuration file, relative to the working directory
pub const LOCAL_CONFIG_PATH: &str = ".comment-board/config.toml";

/// Default list endpoint of the mock server
pub const DEFAULT_REMOTE_URL: &str = "http://localhost:3004/list";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the initial list comes from
    pub source: SourceConfig,
    /// The local identity
    pub user: UserConfig,
    /// List behaviour
    pub list: ListConfig,
    /// UI settings
    pub ui: UiConfig,
}

impl Config {
    /// Read a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BoardError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| e.with_context(format!("Failed to read {}", path.display())))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BoardError::Toml(e.to_string()))
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| BoardError::Toml(e.to_string()))
    }

    /// Locate and read the configuration
    ///
    /// An explicit path must exist. Otherwise the project-local file is
    /// tried, then the per-user file, then defaults are used.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        for candidate in Self::search_paths() {
            if candidate.exists() {
                debug!("Using configuration {:?}", candidate);
                let config = Self::load(&candidate)?;
                return Ok((config, Some(candidate)));
            }
        }

        debug!("No configuration file found, using defaults");
        Ok((Self::default(), None))
    }

    /// Candidate configuration files, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_PATH)];
        if let Some(user) = user_config_path() {
            paths.push(user);
        }
        paths
    }

    /// The configured local identity
    pub fn current_user(&self) -> CurrentUser {
        CurrentUser::new(Author::new(
            self.user.id.clone(),
            self.user.display_name.clone(),
            self.user.avatar.clone(),
        ))
    }

    /// Validator for new comments
    pub fn validator(&self) -> CommentValidator {
        CommentValidator::with_max_length(self.list.max_comment_length)
    }

    /// Check values that TOML alone cannot enforce
    pub fn validate(&self) -> Result<()> {
        if self.user.id.trim().is_empty() {
            return Err(BoardError::Config("user.id must not be empty".to_string()));
        }
        if self.list.max_comment_length == 0 {
            return Err(BoardError::Config(
                "list.max_comment_length must be positive".to_string(),
            ));
        }
        if self.source.kind == SourceKind::Remote && self.source.url.trim().is_empty() {
            return Err(BoardError::Config(
                "source.url is required for the remote source".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-user configuration file
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "comment-board", "comment-board")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .or_else(|| dirs::home_dir().map(|home| home.join(".comment-board").join("config.toml")))
}

/// Kind of comment source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Built-in seed list
    Static,
    /// HTTP list endpoint
    #[default]
    Remote,
    /// Local JSON file
    File,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Static => write!(f, "static"),
            SourceKind::Remote => write!(f, "remote"),
            SourceKind::File => write!(f, "file"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "static" | "seed" => Ok(SourceKind::Static),
            "remote" | "http" => Ok(SourceKind::Remote),
            "file" | "json" => Ok(SourceKind::File),
            other => Err(BoardError::Validation(format!(
                "Unknown source '{}' (expected static, remote or file)",
                other
            ))),
        }
    }
}

/// Source-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Which source to use
    pub kind: SourceKind,
    /// List endpoint for the remote source
    pub url: String,
    /// JSON file for the file source
    pub path: PathBuf,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Remote,
            url: DEFAULT_REMOTE_URL.to_string(),
            path: PathBuf::from("db.json"),
            timeout_secs: 10,
        }
    }
}

/// Local identity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// User id, compared against comment authors
    pub id: String,
    /// Name attached to published comments
    pub display_name: String,
    /// Avatar reference
    pub avatar: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        let seed = crate::source::seed_user();
        Self {
            id: seed.id.0,
            display_name: seed.display_name,
            avatar: seed.avatar,
        }
    }
}

/// List-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Tab selected at startup
    pub default_sort: SortMode,
    /// Maximum comment length in characters
    pub max_comment_length: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_sort: SortMode::ByLikesDescending,
            max_comment_length: MAX_COMMENT_LENGTH,
        }
    }
}

/// UI-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show avatar references next to names
    pub show_avatars: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { show_avatars: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source.kind, SourceKind::Remote);
        assert_eq!(config.source.url, DEFAULT_REMOTE_URL);
        assert_eq!(config.list.default_sort, SortMode::ByLikesDescending);
        assert_eq!(config.user.id, "30009257");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[source]"));
        assert!(toml.contains("[user]"));
        assert!(toml.contains("default_sort = \"hot\""));

        let config2 = Config::from_toml(&toml).unwrap();
        assert_eq!(config.source.timeout_secs, config2.source.timeout_secs);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml("[source]\nkind = \"static\"\n\n[list]\ndefault_sort = \"time\"\n")
            .unwrap();
        assert_eq!(config.source.kind, SourceKind::Static);
        assert_eq!(config.list.default_sort, SortMode::ByCreatedAtDescending);
        assert_eq!(config.list.max_comment_length, MAX_COMMENT_LENGTH);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Config::from_toml("[source\nkind="),
            Err(BoardError::Toml(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_user() {
        let mut config = Config::default();
        config.user.id = String::new();
        assert!(matches!(config.validate(), Err(BoardError::Config(_))));
    }

    #[test]
    fn test_current_user_from_config() {
        let mut config = Config::default();
        config.user.id = "42".to_string();
        assert_eq!(config.current_user().id().as_str(), "42");
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[user]\nid = \"7\"\ndisplay_name = \"Tester\"").unwrap();

        let (config, path) = Config::discover(Some(file.path())).unwrap();
        assert_eq!(config.user.display_name, "Tester");
        assert_eq!(path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let result = Config::discover(Some(Path::new("/nonexistent/comment-board.toml")));
        assert!(matches!(result, Err(BoardError::FileNotFound(_))));
    }

    #[test]
    fn test_source_kind_parse() {
        assert_eq!("static".parse::<SourceKind>().unwrap(), SourceKind::Static);
        assert_eq!("HTTP".parse::<SourceKind>().unwrap(), SourceKind::Remote);
        assert!("ftp".parse::<SourceKind>().is_err());
    }
}
