//! oEmbed provider
//!
//! Asks the tweet's host service for ready-to-embed HTML.

use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

use crate::config::SocialFieldsConfig;
use crate::remote::{FetchError, HttpClient, HttpMethod, HttpRequest};

/// Fetches embed HTML for a URL.
pub trait OEmbedProvider: Send + Sync {
    /// Returns the embed HTML, or why the URL is not embeddable.
    fn fetch(&self, url: &str) -> Result<String, EmbedError>;
}

/// The part of an oEmbed reply we use
#[derive(Debug, Deserialize)]
struct OEmbedReply {
    #[serde(default)]
    html: Option<String>,
}

/// Twitter's oEmbed endpoint
pub struct TwitterOEmbed {
    client: Arc<dyn HttpClient>,
    endpoint: String,
}

impl TwitterOEmbed {
    /// Creates a provider using the endpoint from config.
    pub fn new(client: Arc<dyn HttpClient>, config: &SocialFieldsConfig) -> Self {
        Self {
            client,
            endpoint: config.oembed_endpoint.clone(),
        }
    }

    /// Endpoint URL for a tweet.
    pub fn request_url(&self, tweet_url: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("url", tweet_url)
            .finish();
        format!("{}?{}", self.endpoint, query)
    }
}

impl OEmbedProvider for TwitterOEmbed {
    fn fetch(&self, url: &str) -> Result<String, EmbedError> {
        let request = HttpRequest::new(HttpMethod::Get, &self.request_url(url));
        let response = self.client.request(&request)?;

        if !response.is_success() {
            return Err(FetchError::HttpError(response.status).into());
        }

        let reply: OEmbedReply = serde_json::from_str(&response.body)?;
        match reply.html {
            Some(html) if !html.trim().is_empty() => Ok(html),
            _ => Err(EmbedError::NoEmbed),
        }
    }
}

/// Reasons a URL could not be embedded
#[derive(Debug, Error)]
pub enum EmbedError {
    /// Provider could not be reached or answered with an error status
    #[error("oEmbed fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Provider reply was not an oEmbed document
    #[error("Invalid oEmbed reply: {0}")]
    InvalidReply(#[from] serde_json::Error),

    /// Provider answered without any HTML
    #[error("No embeddable HTML for this URL")]
    NoEmbed,
}
