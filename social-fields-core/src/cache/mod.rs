// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cache layer for remote lookups
//!
//! Maps a string key to a stored value with a time-to-live. The store
//! itself belongs to the host (a transient table, Redis, memcached...);
//! this module only defines the seam and an in-memory implementation.
//!
//! Keys for URL lookups are a namespace tag followed by the hex SHA-256 of
//! the URL, so arbitrary input length or characters never reach the store.

mod memory;

pub use memory::MemoryCacheStore;

use ring::digest::{digest, SHA256};
use std::time::Duration;
use thiserror::Error;

/// Key-value store with per-entry TTL.
///
/// An absent or expired key is a miss (`Ok(None)`).
pub trait CacheStore: Send + Sync {
    /// Reads a value.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Writes a value that expires after `ttl`.
    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
}

/// Derives the cache key for a URL lookup.
///
/// # Example
/// ```
/// use social_fields_core::cache::cache_key;
///
/// let key = cache_key("gvsfp", "https://twitter.com/alice");
/// assert!(key.starts_with("gvsfp"));
/// assert_eq!(key.len(), "gvsfp".len() + 64);
/// ```
pub fn cache_key(namespace: &str, url: &str) -> String {
    let hash = digest(&SHA256, url.as_bytes());
    format!("{}{}", namespace, hex::encode(hash.as_ref()))
}

/// Errors that can occur with a cache store
#[derive(Debug, Error)]
pub enum CacheError {
    /// Backing store could not be reached
    #[error("Cache store unavailable: {0}")]
    Unavailable(String),

    /// Stored payload could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
