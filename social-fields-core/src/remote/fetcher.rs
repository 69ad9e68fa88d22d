//! Cached remote fetcher
//!
//! Every profile probe goes through `CachedFetcher::fetch`:
//! 1. Derive the key from the URL
//! 2. Return the cached response (or cached failure) on hit
//! 3. Otherwise perform the request and cache the outcome for the full TTL
//!
//! Failures are cached too. A dead endpoint is hit at most once per TTL
//! instead of on every submission.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::client::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use super::error::FetchError;
use crate::cache::{cache_key, CacheError, CacheStore};
use crate::config::SocialFieldsConfig;

/// What the cache holds for one URL
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum CachedLookup {
    Response { status: u16, body: String },
    Unavailable,
}

impl CachedLookup {
    fn into_result(self) -> Result<HttpResponse, FetchError> {
        match self {
            CachedLookup::Response { status, body } => Ok(HttpResponse { status, body }),
            CachedLookup::Unavailable => Err(FetchError::Unavailable),
        }
    }
}

/// HTTP client with a TTL cache in front of it
pub struct CachedFetcher {
    client: Arc<dyn HttpClient>,
    store: Arc<dyn CacheStore>,
    namespace: String,
    ttl: Duration,
}

impl CachedFetcher {
    /// Creates a fetcher using the namespace and TTL from config.
    pub fn new(
        client: Arc<dyn HttpClient>,
        store: Arc<dyn CacheStore>,
        config: &SocialFieldsConfig,
    ) -> Self {
        Self {
            client,
            store,
            namespace: config.cache_namespace.clone(),
            ttl: config.cache_ttl,
        }
    }

    /// Fetches a URL, answering from cache when possible.
    ///
    /// The key depends on the URL only.
    pub fn fetch(&self, method: HttpMethod, url: &str) -> Result<HttpResponse, FetchError> {
        let key = cache_key(&self.namespace, url);

        if let Some(cached) = self.read(&key) {
            debug!(url, "remote lookup served from cache");
            return cached.into_result();
        }

        debug!(url, method = method.as_str(), "remote lookup cache miss");
        let outcome = self.client.request(&HttpRequest::new(method, url));

        let entry = match &outcome {
            Ok(response) => CachedLookup::Response {
                status: response.status,
                body: response.body.clone(),
            },
            Err(e) => {
                warn!(url, error = %e, "remote lookup failed; caching as unavailable");
                CachedLookup::Unavailable
            }
        };
        self.write(&key, &entry);

        outcome
    }

    /// Returns the key a URL is cached under.
    pub fn key_for(&self, url: &str) -> String {
        cache_key(&self.namespace, url)
    }

    fn read(&self, key: &str) -> Option<CachedLookup> {
        let raw = match self.store.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key, error = %e, "cache read failed; treating as miss");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(key, error = %e, "corrupt cache entry; treating as miss");
                None
            }
        }
    }

    fn write(&self, key: &str, entry: &CachedLookup) {
        let result = serde_json::to_string(entry)
            .map_err(CacheError::from)
            .and_then(|raw| self.store.set(key, &raw, self.ttl));

        if let Err(e) = result {
            warn!(key, error = %e, "cache write failed");
        }
    }
}
