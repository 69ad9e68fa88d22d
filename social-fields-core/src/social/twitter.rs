//! Twitter handle checker

use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::debug;

use super::registry::{is_blank, ProfileChecker};
use crate::config::SocialFieldsConfig;
use crate::remote::{CachedFetcher, HttpMethod};

static HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@?[A-Za-z0-9_]{1,15}$").expect("handle pattern is valid"));

/// Returns true if the value follows Twitter's handle grammar: an optional
/// `@` followed by 1-15 letters, digits or underscores.
///
/// # Examples
///
/// ```
/// use social_fields_core::social::is_valid_handle;
///
/// assert!(is_valid_handle("@alice"));
/// assert!(is_valid_handle("alice_99"));
/// assert!(!is_valid_handle("alice smith"));
/// assert!(!is_valid_handle("@this_is_far_too_long"));
/// ```
pub fn is_valid_handle(value: &str) -> bool {
    HANDLE.is_match(value)
}

/// Checks Twitter handles: grammar first, then an optional HEAD probe of
/// the profile page.
pub struct TwitterChecker {
    fetcher: Arc<CachedFetcher>,
    base_url: String,
    verify_remote: bool,
}

impl TwitterChecker {
    /// Creates a checker from config.
    pub fn new(fetcher: Arc<CachedFetcher>, config: &SocialFieldsConfig) -> Self {
        Self {
            fetcher,
            base_url: config.twitter_base_url.trim_end_matches('/').to_string(),
            verify_remote: config.verify_twitter_remote,
        }
    }

    /// Profile page URL for a handle, without the leading `@`.
    pub fn profile_url(&self, handle: &str) -> String {
        format!("{}/{}", self.base_url, handle.trim_start_matches('@'))
    }
}

impl ProfileChecker for TwitterChecker {
    fn is_valid(&self, value: &str) -> bool {
        if is_blank(value) {
            return true;
        }

        if !is_valid_handle(value) {
            return false;
        }

        if !self.verify_remote {
            return true;
        }

        match self.fetcher.fetch(HttpMethod::Head, &self.profile_url(value)) {
            Ok(response) => response.status != 404,
            Err(e) => {
                debug!(handle = value, error = %e, "twitter probe failed; accepting handle");
                true
            }
        }
    }
}
