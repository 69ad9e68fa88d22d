// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote lookups
//!
//! Provides:
//! - The `HttpClient` seam and its reqwest-backed implementation
//! - A scripted mock client for tests
//! - `CachedFetcher`, which puts the cache layer in front of a client

mod client;
mod error;
mod fetcher;
mod mock;

#[cfg(feature = "remote")]
pub use client::ReqwestClient;
pub use client::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use error::FetchError;
pub use fetcher::CachedFetcher;
pub use mock::MockHttpClient;
