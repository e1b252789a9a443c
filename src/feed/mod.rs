//! Tweet feed module
//!
//! Loads tweets for the tweets view from a local file holding a search
//! response in the Twitter v1.1 shape.

mod client;
mod parser;
mod traits;

pub use client::FileFeed;
pub use traits::TweetFeed;

#[cfg(test)]
pub use traits::MockTweetFeed;
