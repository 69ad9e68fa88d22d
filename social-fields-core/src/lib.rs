// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Social Fields Core Library
//!
//! Remote validation of social profile fields and tweet embedding for
//! form engines. Every remote lookup goes through a cache so that repeated
//! validations and renders do not re-hit the network.
//!
//! The host form engine stays outside this crate: it injects its cache
//! store, entry metadata store and HTTP client, and calls in with field
//! values.

pub mod cache;
pub mod config;
pub mod embed;
pub mod form;
pub mod remote;
pub mod social;

pub use cache::{cache_key, CacheError, CacheStore, MemoryCacheStore};
pub use config::{ConfigError, SocialFieldsConfig, WEEK};
pub use embed::{
    tweet_cache_key, tweet_status_id, validate_tweet_url, CapabilityCheck, EmbedError,
    EntryMetaStore, MemoryEntryMeta, OEmbedProvider, RenderContext, TweetEmbedResolver,
    TweetUrlError, TwitterOEmbed,
};
pub use form::{
    ConditionalLogic, Form, FormField, FormValidator, NoConditionalLogic, Submission,
    ValidationResult,
};
#[cfg(feature = "remote")]
pub use remote::ReqwestClient;
pub use remote::{
    CachedFetcher, FetchError, HttpClient, HttpMethod, HttpRequest, HttpResponse, MockHttpClient,
};
pub use social::{CheckerRegistry, FacebookChecker, ProfileChecker, TwitterChecker};
