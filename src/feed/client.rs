//! File-backed tweet feed

use super::parser::{parse_search_response, FeedError};
use super::traits::TweetFeed;
use crate::state::Tweet;
use anyhow::Result;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the configured feed file
const FEED_FILE_ENV: &str = "TWEETS_TUI_FEED";

/// Feed that reads a saved search response from disk
#[derive(Debug, Clone, Default)]
pub struct FileFeed {
    path: Option<PathBuf>,
}

impl FileFeed {
    /// Create a feed reading `path`; without a path the feed is always empty
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: Self::resolve_path(std::env::var_os(FEED_FILE_ENV), path),
        }
    }

    /// Pick the feed file: a non-empty env value wins over the configured path
    fn resolve_path(env: Option<OsString>, configured: Option<PathBuf>) -> Option<PathBuf> {
        env.filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or(configured)
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}

#[async_trait]
impl TweetFeed for FileFeed {
    async fn list_tweets(&mut self, location: &str) -> Result<Vec<Tweet>> {
        let Some(path) = &self.path else {
            tracing::info!("No feed file configured, showing no tweets for {location}");
            return Ok(Vec::new());
        };

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| FeedError::Io {
                path: path.clone(),
                source,
            })?;
        let tweets = parse_search_response(&content)?;
        tracing::info!(
            "Loaded {} tweets for {location} from {}",
            tweets.len(),
            path.display()
        );
        Ok(tweets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn feed_for(path: Option<PathBuf>) -> FileFeed {
        // Bypass the env override so tests don't depend on the caller's shell
        FileFeed { path }
    }

    mod resolve_path {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_env_takes_precedence() {
            let resolved = FileFeed::resolve_path(
                Some(OsString::from("/tmp/env.json")),
                Some(PathBuf::from("/tmp/config.json")),
            );
            assert_eq!(resolved, Some(PathBuf::from("/tmp/env.json")));
        }

        #[test]
        fn test_configured_path_without_env() {
            let resolved = FileFeed::resolve_path(None, Some(PathBuf::from("/tmp/config.json")));
            assert_eq!(resolved, Some(PathBuf::from("/tmp/config.json")));
        }

        #[test]
        fn test_empty_env_is_ignored() {
            let resolved =
                FileFeed::resolve_path(Some(OsString::new()), Some(PathBuf::from("/tmp/config.json")));
            assert_eq!(resolved, Some(PathBuf::from("/tmp/config.json")));
        }

        #[test]
        fn test_neither_set() {
            assert_eq!(FileFeed::resolve_path(None, None), None);
        }
    }

    #[tokio::test]
    async fn test_env_file_is_read_over_configured() {
        let mut env_file = tempfile::NamedTempFile::new().unwrap();
        write!(
            env_file,
            r#"{{"statuses": [{{"text": "from env", "user": {{"name": "E", "screen_name": "e", "profile_image_url_https": ""}}}}]}}"#
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();

        let mut feed = feed_for(FileFeed::resolve_path(
            Some(env_file.path().as_os_str().to_os_string()),
            Some(dir.path().join("absent.json")),
        ));
        let tweets = feed.list_tweets("Washington D.C.").await.unwrap();
        assert_eq!(tweets.len(), 1);
        assert_eq!(tweets[0].content, "from env");
    }

    #[tokio::test]
    async fn test_no_path_yields_empty_feed() {
        let mut feed = feed_for(None);
        let tweets = feed.list_tweets("Washington D.C.").await.unwrap();
        assert!(tweets.is_empty());
    }

    #[tokio::test]
    async fn test_reads_and_parses_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"statuses": [{{"text": "hi", "user": {{"name": "A", "screen_name": "a", "profile_image_url_https": ""}}}}]}}"#
        )
        .unwrap();

        let mut feed = feed_for(Some(file.path().to_path_buf()));
        let tweets = feed.list_tweets("Washington D.C.").await.unwrap();
        assert_eq!(tweets.len(), 1);
        assert_eq!(tweets[0].content, "hi");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut feed = feed_for(Some(dir.path().join("absent.json")));
        let err = feed.list_tweets("Washington D.C.").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FeedError>(),
            Some(FeedError::Io { .. })
        ));
    }

    #[test]
    fn test_invalid_file_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let mut feed = feed_for(Some(file.path().to_path_buf()));
        let err = tokio_test::block_on(feed.list_tweets("Washington D.C.")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FeedError>(),
            Some(FeedError::Json(_))
        ));
    }
}
