//! Tweet embed resolver
//!
//! Resolves a tweet URL to embed HTML, caching the result in the entry's
//! metadata under `tweet_output_<form_id>:<field_id>`.

use std::sync::Arc;
use tracing::{debug, warn};

use super::meta::EntryMetaStore;
use super::oembed::{EmbedError, OEmbedProvider};

/// Capability that may force a fresh oEmbed fetch.
pub const PUBLISH_VIEWS_CAPABILITY: &str = "publish_gravityviews";

/// Query parameters that request a cache bypass.
pub const CACHE_BYPASS_PARAMS: [&str; 2] = ["cache", "nocache"];

/// Permission lookup for the current viewer.
///
/// Closures `Fn(&str) -> bool` implement this too.
pub trait CapabilityCheck {
    /// Returns true if the viewer has the named capability.
    fn has_capability(&self, name: &str) -> bool;
}

impl<F> CapabilityCheck for F
where
    F: Fn(&str) -> bool,
{
    fn has_capability(&self, name: &str) -> bool {
        self(name)
    }
}

/// Meta key for a field's rendered tweet.
///
/// # Example
/// ```
/// use social_fields_core::embed::tweet_cache_key;
///
/// assert_eq!(tweet_cache_key(3, 7), "tweet_output_3:7");
/// ```
pub fn tweet_cache_key(form_id: u32, field_id: u32) -> String {
    format!("tweet_output_{}:{}", form_id, field_id)
}

/// Decides whether a render may use (and fill) the entry cache.
///
/// Only viewers with `publish_gravityviews` can bypass it, by sending a
/// `cache` or `nocache` query parameter.
pub fn use_entry_cache(viewer: &dyn CapabilityCheck, query_keys: &[&str]) -> bool {
    if !viewer.has_capability(PUBLISH_VIEWS_CAPABILITY) {
        return true;
    }

    !query_keys
        .iter()
        .any(|key| CACHE_BYPASS_PARAMS.iter().any(|param| param == key))
}

/// What the host knows about the field being rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext<'a> {
    /// Submission entry, absent when rendering outside an entry
    pub entry_id: Option<u64>,
    /// Form the field belongs to
    pub form_id: u32,
    /// Field being rendered
    pub field_id: u32,
    /// Submitted tweet URL
    pub value: &'a str,
    /// "Show as embedded tweet" field option
    pub embed_enabled: bool,
}

/// Resolves tweet URLs to embed HTML with an entry-scoped cache
pub struct TweetEmbedResolver {
    provider: Arc<dyn OEmbedProvider>,
    meta: Arc<dyn EntryMetaStore>,
}

impl TweetEmbedResolver {
    /// Creates a resolver.
    pub fn new(provider: Arc<dyn OEmbedProvider>, meta: Arc<dyn EntryMetaStore>) -> Self {
        Self { provider, meta }
    }

    /// Returns embed HTML for a tweet.
    ///
    /// With `use_cache`, a cached record for this entry/field is returned
    /// without contacting the provider. With `set_cache`, a freshly fetched
    /// embed is stored for the entry, owned by `form_id`.
    ///
    /// Any error means the tweet is not embeddable and the caller should
    /// fall back to a plain link.
    pub fn resolve(
        &self,
        tweet_url: &str,
        entry_id: u64,
        form_id: u32,
        field_id: u32,
        use_cache: bool,
        set_cache: bool,
    ) -> Result<String, EmbedError> {
        let key = tweet_cache_key(form_id, field_id);

        if use_cache {
            match self.meta.get(entry_id, &key) {
                Ok(Some(html)) if !html.is_empty() => {
                    debug!(entry_id, key = %key, "tweet embed served from entry cache");
                    return Ok(html);
                }
                Ok(_) => {}
                Err(e) => warn!(entry_id, key = %key, error = %e, "entry meta read failed"),
            }
        }

        let html = self.provider.fetch(tweet_url)?;

        if set_cache {
            if let Err(e) = self.meta.set(entry_id, &key, &html, form_id) {
                warn!(entry_id, key = %key, error = %e, "entry meta write failed");
            }
        }

        Ok(html)
    }

    /// Renders a tweet field.
    ///
    /// Returns `output` (the host's plain rendering, usually a link) when
    /// there is no entry, the embed option is off, or the tweet is not
    /// embeddable.
    pub fn render(
        &self,
        context: &RenderContext<'_>,
        output: &str,
        viewer: &dyn CapabilityCheck,
        query_keys: &[&str],
    ) -> String {
        let Some(entry_id) = context.entry_id else {
            return output.to_string();
        };

        if !context.embed_enabled {
            return output.to_string();
        }

        let use_cache = use_entry_cache(viewer, query_keys);

        match self.resolve(
            context.value,
            entry_id,
            context.form_id,
            context.field_id,
            use_cache,
            use_cache,
        ) {
            Ok(html) => html,
            Err(e) => {
                debug!(entry_id, url = context.value, error = %e, "tweet not embeddable");
                output.to_string()
            }
        }
    }
}
