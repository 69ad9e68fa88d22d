// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tweet embedding
//!
//! Renders a submitted tweet URL as an embedded card:
//! - oEmbed provider seam plus the Twitter implementation
//! - Entry-scoped metadata store that caches the rendered HTML
//! - Resolver and render entry point with a privileged cache bypass
//! - Submit-time tweet URL validation

mod meta;
mod oembed;
mod resolver;
mod tweet_url;

pub use meta::{EntryMetaStore, MemoryEntryMeta};
pub use oembed::{EmbedError, OEmbedProvider, TwitterOEmbed};
pub use resolver::{
    tweet_cache_key, use_entry_cache, CapabilityCheck, RenderContext, TweetEmbedResolver,
    CACHE_BYPASS_PARAMS, PUBLISH_VIEWS_CAPABILITY,
};
pub use tweet_url::{tweet_status_id, validate_tweet_url, TweetUrlError};
