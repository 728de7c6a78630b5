//! Mock HTTP client for testing.
//!
//! Returns canned responses or errors per URL and records every request.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded GET request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Fail at the transport level
    Error(HttpError),
}

impl MockResponse {
    /// 200 response with a JSON body.
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(&value))
    }

    /// 200 response with a text body.
    pub fn text(body: &str) -> Self {
        MockResponse::Success(Response::new(200, bytes::Bytes::from(body.to_string())))
    }

    /// Response with the given status and an empty JSON error body.
    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::new(
            status,
            bytes::Bytes::from(r#"{"message":"mock error"}"#),
        ))
    }
}

/// Mock HTTP client for testing.
///
/// URLs are matched exactly first, then by longest configured prefix, then
/// the default response if one is set.
///
/// # Example
///
/// ```ignore
/// use hubdeck::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "https://api.github.com/users/octocat",
///     MockResponse::json(serde_json::json!({"login": "octocat"})),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a URL or URL prefix.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        lock(&self.responses).insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Recorded request URLs, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        lock(&self.requests).iter().map(|r| r.url.clone()).collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = lock(&self.responses);

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        lock(&self.default_response).clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        lock(&self.requests).push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
