//! HTTP comment source

use crate::payload::parse_comment_list;
use cb_core::comment::Comment;
use cb_core::source::CommentSource;
use cb_core::{BoardError, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// Source fetching the list with a single `GET` request
pub struct RemoteSource {
    url: String,
    client: Client,
}

impl RemoteSource {
    /// Create a source for `url`
    ///
    /// The URL is only checked on fetch, so a bad one shows up as an
    /// unavailable list.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = url.into();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("comment-board/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BoardError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { url, client })
    }
}

impl CommentSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    fn fetch(&self) -> Result<Vec<Comment>> {
        debug!("GET {}", self.url);
        let unavailable = |reason: String| BoardError::source_unavailable("remote", reason);

        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(unavailable(format!("{} is not an http(s) URL", self.url)));
        }

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| unavailable(format!("request to {} failed: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("{} responded with {}", self.url, status)));
        }

        let body = response
            .text()
            .map_err(|e| unavailable(format!("failed to read response body: {}", e)))?;
        let comments = parse_comment_list(&body)
            .map_err(|e| unavailable(format!("unexpected response body: {}", e)))?;

        debug!("Fetched {} comments from {}", comments.len(), self.url);
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a local port
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            let mut stream = reader.into_inner();
            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
            .unwrap();
        });

        format!("http://{}/list", addr)
    }

    #[test]
    fn test_fetch_list() {
        let url = serve_once(
            "200 OK",
            r#"[{"rpid":3,"user":{"uid":"13258165","avatar":"","uname":"Jay Chou"},"content":"Oh, not bad","ctime":"10-18 08:15","like":100}]"#,
        );
        let source = RemoteSource::new(url, Duration::from_secs(5)).unwrap();

        let comments = source.fetch().unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text, "Oh, not bad");
    }

    #[test]
    fn test_error_status_is_unavailable() {
        let url = serve_once("500 Internal Server Error", "{}");
        let source = RemoteSource::new(url, Duration::from_secs(5)).unwrap();

        let err = source.fetch().unwrap_err();
        assert!(matches!(err, BoardError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_bad_body_is_unavailable() {
        let url = serve_once("200 OK", "<html>oops</html>");
        let source = RemoteSource::new(url, Duration::from_secs(5)).unwrap();
        assert!(matches!(
            source.fetch(),
            Err(BoardError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_unreachable_host_is_unavailable() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source =
            RemoteSource::new(format!("http://{}/list", addr), Duration::from_secs(2)).unwrap();
        assert!(matches!(
            source.fetch(),
            Err(BoardError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_non_http_url_is_unavailable() {
        let source = RemoteSource::new("ftp://example.com/list", Duration::from_secs(1)).unwrap();
        let err = source.fetch().unwrap_err();
        assert!(matches!(err, BoardError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("ftp://example.com/list"));
    }
}
