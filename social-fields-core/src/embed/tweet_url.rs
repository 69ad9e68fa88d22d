//! Tweet URL validation
//!
//! Submit-time check for the tweet field: the value must be an absolute
//! URL pointing at a tweet's status page.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static TWEET_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)https?://(?:www\.)?twitter\.com/(?:.*?)/status/(\d+)/?")
        .expect("tweet url pattern is valid")
});

/// Errors from tweet URL validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TweetUrlError {
    /// Not an absolute URL at all
    #[error("Please enter a valid Website URL (e.g. https://example.com).")]
    InvalidUrl,

    /// A URL, but not a tweet status URL
    #[error("Not a valid Tweet URL.")]
    NotATweet,
}

/// Returns the status id of a tweet URL.
///
/// # Example
/// ```
/// use social_fields_core::embed::tweet_status_id;
///
/// let id = tweet_status_id("https://twitter.com/jack/status/20").unwrap();
/// assert_eq!(id, "20");
/// ```
pub fn tweet_status_id(value: &str) -> Result<&str, TweetUrlError> {
    let value = value.trim();
    if url::Url::parse(value).is_err() {
        return Err(TweetUrlError::InvalidUrl);
    }

    TWEET_URL
        .captures(value)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
        .ok_or(TweetUrlError::NotATweet)
}

/// Validates a submitted tweet URL.
///
/// Blank values pass; whether the field is required is up to the host.
pub fn validate_tweet_url(value: &str) -> Result<(), TweetUrlError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    tweet_status_id(value).map(|_| ())
}
