//! cb-source - Comment list sources for comment-board
//!
//! This crate provides the sources that read the initial list from outside
//! the process: the mock server's HTTP endpoint and its JSON data file.

mod file_source;
mod payload;
mod remote_source;

pub use file_source::FileSource;
pub use payload::parse_comment_list;
pub use remote_source::RemoteSource;

use cb_core::config::{SourceConfig, SourceKind};
use cb_core::source::{CommentSource, StaticSource};
use cb_core::Result;
use std::time::Duration;

/// Build the source described by `config`
pub fn from_config(config: &SourceConfig) -> Result<Box<dyn CommentSource>> {
    let source: Box<dyn CommentSource> = match config.kind {
        SourceKind::Static => Box::new(StaticSource::seed()?),
        SourceKind::Remote => Box::new(RemoteSource::new(
            &config.url,
            Duration::from_secs(config.timeout_secs),
        )?),
        SourceKind::File => Box::new(FileSource::new(&config.path)),
    };
    tracing::debug!("Using {} comment source", source.name());
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_static() {
        let config = SourceConfig {
            kind: SourceKind::Static,
            ..SourceConfig::default()
        };
        let source = from_config(&config).unwrap();
        assert_eq!(source.name(), "static");
        assert_eq!(source.fetch().unwrap().len(), 3);
    }

    #[test]
    fn test_from_config_file() {
        let config = SourceConfig {
            kind: SourceKind::File,
            path: "missing-db.json".into(),
            ..SourceConfig::default()
        };
        let source = from_config(&config).unwrap();
        assert_eq!(source.name(), "file");
        assert!(source.fetch().is_err());
    }

    #[test]
    fn test_from_config_remote() {
        let source = from_config(&SourceConfig::default()).unwrap();
        assert_eq!(source.name(), "remote");
    }

    #[test]
    fn test_from_config_bad_url_builds_unavailable_source() {
        let config = SourceConfig {
            url: "localhost:3004/list".to_string(),
            ..SourceConfig::default()
        };
        let source = from_config(&config).unwrap();
        assert!(matches!(
            source.fetch(),
            Err(cb_core::BoardError::SourceUnavailable { .. })
        ));
    }
}
