//! Facebook page/account checker
//!
//! Accepts either a bare account slug or a Facebook URL, and asks the Graph
//! lookup whether the account exists. Only error code 803 ("alias does not
//! exist") rejects the value.

use regex::Regex;
use serde_json::Value;
use std::sync::{Arc, LazyLock};
use tracing::debug;

use super::registry::{is_blank, ProfileChecker};
use crate::config::SocialFieldsConfig;
use crate::remote::{CachedFetcher, HttpMethod};

/// Graph error code for an alias that does not exist.
pub const MISSING_ALIAS_CODE: i64 = 803;

static FACEBOOK_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:www\.)?facebook\.com/(?:(?:\w\.)*#!/)?(?P<path>[^?#]*)")
        .expect("facebook url pattern is valid")
});

/// Extracts the account slug from a Facebook URL.
///
/// The slug is the last non-empty path segment before any query string.
/// Values that are not Facebook URLs are returned unchanged.
///
/// # Examples
///
/// ```
/// use social_fields_core::social::extract_account;
///
/// assert_eq!(extract_account("https://www.facebook.com/acme?ref=ts"), "acme");
/// assert_eq!(extract_account("facebook.com/pages/Acme/12345/"), "12345");
/// assert_eq!(extract_account("acme.corp"), "acme.corp");
/// ```
pub fn extract_account(value: &str) -> &str {
    FACEBOOK_URL
        .captures(value)
        .and_then(|captures| captures.name("path"))
        .and_then(|path| path.as_str().split('/').filter(|s| !s.is_empty()).last())
        .unwrap_or(value)
}

/// Returns true if a Graph reply carries the "alias does not exist" error.
fn reports_missing_alias(body: &str) -> bool {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return false;
    };

    let code = &json["error"]["code"];
    let code = code
        .as_i64()
        .or_else(|| code.as_str().and_then(|s| s.trim().parse().ok()));

    code == Some(MISSING_ALIAS_CODE)
}

/// Checks Facebook accounts against the Graph lookup.
pub struct FacebookChecker {
    fetcher: Arc<CachedFetcher>,
    graph_base_url: String,
}

impl FacebookChecker {
    /// Creates a checker from config.
    pub fn new(fetcher: Arc<CachedFetcher>, config: &SocialFieldsConfig) -> Self {
        Self {
            fetcher,
            graph_base_url: config.graph_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Graph lookup URL for a submitted value.
    pub fn lookup_url(&self, value: &str) -> String {
        let account: String = url::form_urlencoded::byte_serialize(extract_account(value).as_bytes()).collect();
        format!("{}/{}", self.graph_base_url, account)
    }
}

impl ProfileChecker for FacebookChecker {
    fn is_valid(&self, value: &str) -> bool {
        if is_blank(value) {
            return true;
        }

        match self.fetcher.fetch(HttpMethod::Get, &self.lookup_url(value)) {
            Ok(response) => !reports_missing_alias(&response.body),
            Err(e) => {
                // Only a confirmed 803 may reject
                debug!(value, error = %e, "graph lookup failed; accepting account");
                true
            }
        }
    }
}
