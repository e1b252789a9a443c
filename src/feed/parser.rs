//! Parsing of search responses into tweets

use crate::state::Tweet;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a feed
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed search response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    statuses: Vec<Status>,
}

#[derive(Debug, Deserialize)]
struct Status {
    text: String,
    user: User,
}

#[derive(Debug, Deserialize)]
struct User {
    name: String,
    screen_name: String,
    profile_image_url_https: String,
}

impl From<Status> for Tweet {
    fn from(status: Status) -> Self {
        Tweet {
            username: status.user.name,
            handle: status.user.screen_name,
            content: status.text,
            icon_url: status.user.profile_image_url_https,
        }
    }
}

/// Parse the `statuses` array of a search response, preserving order
pub fn parse_search_response(json: &str) -> Result<Vec<Tweet>, FeedError> {
    let response: SearchResponse = serde_json::from_str(json)?;
    Ok(response.statuses.into_iter().map(Tweet::from).collect())
}
