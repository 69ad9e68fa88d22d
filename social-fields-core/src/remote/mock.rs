//! Mock HTTP client
//!
//! Scripted implementation of `HttpClient` for testing.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::client::{HttpClient, HttpRequest, HttpResponse};
use super::error::FetchError;

#[derive(Debug, Clone)]
enum Reply {
    Response(HttpResponse),
    Failure(String),
}

#[derive(Debug, Default)]
struct MockState {
    routes: HashMap<String, Reply>,
    requests: Vec<HttpRequest>,
}

/// Mock client for testing.
///
/// Replies are keyed by exact URL. Unrouted URLs fail with a transport
/// error, so a test that forgot to script a call fails open rather than
/// hanging on the network.
///
/// # Example
///
/// ```
/// use social_fields_core::remote::{HttpClient, HttpMethod, HttpRequest, MockHttpClient};
///
/// let client = MockHttpClient::new();
/// client.respond("https://twitter.com/alice", 200, "");
///
/// let request = HttpRequest::new(HttpMethod::Head, "https://twitter.com/alice");
/// assert_eq!(client.request(&request).unwrap().status, 200);
/// assert_eq!(client.request_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockHttpClient {
    state: Mutex<MockState>,
}

impl MockHttpClient {
    /// Creates a mock with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a response for a URL.
    pub fn respond(&self, url: &str, status: u16, body: &str) {
        self.lock()
            .routes
            .insert(url.to_string(), Reply::Response(HttpResponse::new(status, body)));
    }

    /// Scripts a transport failure for a URL.
    pub fn fail(&self, url: &str, message: &str) {
        self.lock()
            .routes
            .insert(url.to_string(), Reply::Failure(message.to_string()));
    }

    /// Returns every request performed so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().requests.clone()
    }

    /// Number of requests performed so far.
    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HttpClient for MockHttpClient {
    fn request(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        let mut state = self.lock();
        state.requests.push(request.clone());

        match state.routes.get(&request.url) {
            Some(Reply::Response(response)) => Ok(response.clone()),
            Some(Reply::Failure(message)) => Err(FetchError::Transport(message.clone())),
            None => Err(FetchError::Transport(format!(
                "no route for {} {}",
                request.method.as_str(),
                request.url
            ))),
        }
    }
}
