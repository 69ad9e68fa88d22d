//! HTTP client abstraction
//!
//! Checks only ever need a status code and a body, so the seam is kept that
//! small. Timeout and TLS policy are properties of the client, set once from
//! `SocialFieldsConfig`.

use serde::{Deserialize, Serialize};

use super::error::FetchError;

#[cfg(feature = "remote")]
use crate::config::SocialFieldsConfig;

/// Request method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// GET
    Get,
    /// HEAD, for existence probes where the body is irrelevant
    Head,
}

impl HttpMethod {
    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
        }
    }
}

/// An outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Method
    pub method: HttpMethod,
    /// Absolute URL
    pub url: String,
}

impl HttpRequest {
    /// Creates a request.
    pub fn new(method: HttpMethod, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
        }
    }
}

/// Snapshot of a response, small enough to cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// Body text (empty for HEAD)
    pub body: String,
}

impl HttpResponse {
    /// Creates a response snapshot.
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP client.
///
/// Any status code is a successful exchange; `Err` is reserved for
/// transport-level failures (timeout, DNS, TLS, connection reset).
pub trait HttpClient: Send + Sync {
    /// Performs the request.
    fn request(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError>;
}

/// `HttpClient` backed by reqwest's blocking API
#[cfg(feature = "remote")]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "remote")]
impl ReqwestClient {
    /// Create a new client from config
    pub fn new(config: &SocialFieldsConfig) -> Result<Self, FetchError> {
        if !config.verify_tls {
            tracing::warn!("TLS certificate verification disabled for remote checks");
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        Ok(Self { client })
    }
}

#[cfg(feature = "remote")]
impl HttpClient for ReqwestClient {
    fn request(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Head => reqwest::Method::HEAD,
        };

        let response = self.client.request(method, &request.url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(HttpResponse { status, body })
    }
}
