//! Test Fixtures
//!
//! Wires the mock HTTP client and in-memory stores together.

use std::sync::Arc;

use social_fields_core::{
    CachedFetcher, CheckerRegistry, FormValidator, MemoryCacheStore, MemoryEntryMeta,
    MockHttpClient, SocialFieldsConfig, TweetEmbedResolver, TwitterOEmbed,
};

/// Graph reply for an alias that does not exist.
pub const GRAPH_MISSING_ALIAS: &str = r#"{"error":{"message":"(#803) Some of the aliases you requested do not exist: doesnotexist123456","type":"OAuthException","code":803}}"#;

/// Graph reply for an existing page.
pub const GRAPH_PAGE: &str = r#"{"name":"Acme","id":"123456789"}"#;

/// Graph reply for a lookup that needs a token.
pub const GRAPH_AUTH_ERROR: &str =
    r#"{"error":{"message":"An access token is required","type":"OAuthException","code":104}}"#;

/// oEmbed reply for a tweet.
pub const TWEET_HTML: &str = r#"<blockquote class="twitter-tweet"><p>just setting up my twttr</p>&mdash; jack (@jack) <a href="https://twitter.com/jack/status/20">March 21, 2006</a></blockquote>"#;

pub const TWEET_URL: &str = "https://twitter.com/jack/status/20";

/// Mock client + memory cache with default config.
pub struct Harness {
    pub client: Arc<MockHttpClient>,
    pub store: Arc<MemoryCacheStore>,
    pub config: SocialFieldsConfig,
    pub fetcher: Arc<CachedFetcher>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(SocialFieldsConfig::default())
    }

    pub fn with_config(config: SocialFieldsConfig) -> Self {
        let client = Arc::new(MockHttpClient::new());
        let store = Arc::new(MemoryCacheStore::new());
        let fetcher = Arc::new(CachedFetcher::new(client.clone(), store.clone(), &config));
        Self {
            client,
            store,
            config,
            fetcher,
        }
    }

    pub fn registry(&self) -> CheckerRegistry {
        CheckerRegistry::with_defaults(self.fetcher.clone(), &self.config)
    }

    pub fn validator(&self) -> FormValidator {
        FormValidator::new(self.registry())
    }

    /// Scripts the Graph reply for an account.
    pub fn graph(&self, account: &str, status: u16, body: &str) {
        self.client.respond(
            &format!("https://graph.facebook.com/{}", account),
            status,
            body,
        );
    }

    /// Scripts the profile probe status for a handle.
    pub fn twitter(&self, handle: &str, status: u16) {
        self.client
            .respond(&format!("https://twitter.com/{}", handle), status, "");
    }
}

/// Tweet resolver over a mock client.
pub struct EmbedHarness {
    pub client: Arc<MockHttpClient>,
    pub meta: Arc<MemoryEntryMeta>,
    pub provider: Arc<TwitterOEmbed>,
    pub resolver: TweetEmbedResolver,
}

impl EmbedHarness {
    pub fn new() -> Self {
        let config = SocialFieldsConfig::default();
        let client = Arc::new(MockHttpClient::new());
        let meta = Arc::new(MemoryEntryMeta::new());
        let provider = Arc::new(TwitterOEmbed::new(client.clone(), &config));
        let resolver = TweetEmbedResolver::new(provider.clone(), meta.clone());
        Self {
            client,
            meta,
            provider,
            resolver,
        }
    }

    /// Scripts the oEmbed reply for a tweet URL.
    pub fn oembed(&self, tweet_url: &str, status: u16, body: &str) {
        self.client
            .respond(&self.provider.request_url(tweet_url), status, body);
    }

    pub fn oembed_html(&self, tweet_url: &str, html: &str) {
        let body = serde_json::json!({ "type": "rich", "html": html }).to_string();
        self.oembed(tweet_url, 200, &body);
    }
}
