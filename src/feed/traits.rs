//! Trait abstraction for the tweet feed to enable mocking in tests

use crate::state::Tweet;
use anyhow::Result;
use async_trait::async_trait;

/// Source of tweets for the tweets view
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TweetFeed: Send + Sync {
    /// Fetch the tweets to show for `location`
    async fn list_tweets(&mut self, location: &str) -> Result<Vec<Tweet>>;
}
