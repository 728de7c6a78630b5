//! GitHub REST API client.
//!
//! Stateless GET calls over the [`HttpClient`] seam. Every call returns the
//! decoded body or an [`ApiError`]; callers decide what to show.

pub mod models;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::traits::{Headers, HttpClient, Response};

pub use models::{GithubUser, Profile, Repository, SearchPage, SearchResults};

/// Default upstream base URL.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Sent with every request; GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!("hubdeck/", env!("CARGO_PKG_VERSION"));

/// Accept header for regular JSON endpoints.
pub const JSON_ACCEPT: &str = "application/vnd.github+json";

/// Accept header that makes the README endpoint return raw markdown.
pub const RAW_ACCEPT: &str = "application/vnd.github.v3.raw";

/// Client for the handful of endpoints hubdeck uses.
#[derive(Clone)]
pub struct GithubClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GithubClient {
    /// Client against the public GitHub API.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self::with_base_url(http, GITHUB_API_URL)
    }

    /// Client against another base URL (GitHub Enterprise, tests).
    pub fn with_base_url(http: Arc<dyn HttpClient>, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `search/repositories?q=<query>`, upstream order preserved.
    pub async fn search_repositories(&self, query: &str) -> Result<Vec<Repository>, ApiError> {
        let url = format!(
            "{}/search/repositories?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        let page: SearchPage<Repository> = self.get_json(&url).await?;
        Ok(page.items)
    }

    /// `search/users?q=<query>`, upstream order preserved.
    pub async fn search_users(&self, query: &str) -> Result<Vec<GithubUser>, ApiError> {
        let url = format!(
            "{}/search/users?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        let page: SearchPage<GithubUser> = self.get_json(&url).await?;
        Ok(page.items)
    }

    /// `users/<username>`.
    pub async fn fetch_user_profile(&self, username: &str) -> Result<Profile, ApiError> {
        let url = format!("{}/users/{}", self.base_url, urlencoding::encode(username));
        self.get_json(&url).await
    }

    /// `users/<username>/repos`.
    pub async fn fetch_user_repos(&self, username: &str) -> Result<Vec<Repository>, ApiError> {
        let url = format!(
            "{}/users/{}/repos",
            self.base_url,
            urlencoding::encode(username)
        );
        self.get_json(&url).await
    }

    /// Raw README of the `<username>/<username>` profile repository.
    pub async fn fetch_readme(&self, username: &str) -> Result<String, ApiError> {
        let user = urlencoding::encode(username);
        let url = format!("{}/repos/{}/{}/readme", self.base_url, user, user);
        let response = self.get(&url, RAW_ACCEPT).await?;
        response.text().map_err(|e| ApiError::Body(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.get(url, JSON_ACCEPT).await?;
        Ok(response.json()?)
    }

    async fn get(&self, url: &str, accept: &str) -> Result<Response, ApiError> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), accept.to_string());
        headers.insert("User-Agent".to_string(), USER_AGENT.to_string());

        tracing::debug!("GET {}", url);
        let response = self.http.get(url, &headers).await?;

        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: upstream_message(&response),
            });
        }
        Ok(response)
    }
}

/// The `message` field of a GitHub error body, or the raw body text.
fn upstream_message(response: &Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    match response.json::<ErrorBody>() {
        Ok(body) => body.message,
        Err(_) => response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;
    use serde_json::json;

    const BASE: &str = "https://api.test";

    fn client(mock: &MockHttpClient) -> GithubClient {
        GithubClient::with_base_url(Arc::new(mock.clone()), BASE)
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let mock = MockHttpClient::new();
        let client = GithubClient::with_base_url(Arc::new(mock), "https://api.test/");
        assert_eq!(client.base_url(), "https://api.test");
    }

    #[tokio::test]
    async fn test_search_repositories_encodes_query() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "https://api.test/search/repositories?q=rust%20tui",
            MockResponse::json(json!({"total_count": 0, "items": []})),
        );

        let repos = client(&mock).search_repositories("rust tui").await.unwrap();
        assert!(repos.is_empty());
        assert_eq!(
            mock.requested_urls(),
            vec!["https://api.test/search/repositories?q=rust%20tui"]
        );
    }

    #[tokio::test]
    async fn test_search_users_preserves_order() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "https://api.test/search/users?q=oct",
            MockResponse::json(json!({
                "total_count": 2,
                "items": [
                    {"id": 2, "login": "octo-b", "avatar_url": ""},
                    {"id": 1, "login": "octo-a", "avatar_url": ""}
                ]
            })),
        );

        let users = client(&mock).search_users("oct").await.unwrap();
        let logins: Vec<_> = users.iter().map(|u| u.login.as_str()).collect();
        assert_eq!(logins, vec!["octo-b", "octo-a"]);
    }

    #[tokio::test]
    async fn test_every_request_sends_user_agent() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(json!({"login": "octocat"})));

        client(&mock).fetch_user_profile("octocat").await.unwrap();

        let request = &mock.get_requests()[0];
        assert_eq!(request.url, "https://api.test/users/octocat");
        assert_eq!(request.headers.get("User-Agent"), Some(&USER_AGENT.to_string()));
        assert_eq!(request.headers.get("Accept"), Some(&JSON_ACCEPT.to_string()));
    }

    #[tokio::test]
    async fn test_readme_uses_raw_accept() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "https://api.test/repos/octocat/octocat/readme",
            MockResponse::text("# Hi"),
        );

        let readme = client(&mock).fetch_readme("octocat").await.unwrap();
        assert_eq!(readme, "# Hi");
        assert_eq!(
            mock.get_requests()[0].headers.get("Accept"),
            Some(&RAW_ACCEPT.to_string())
        );
    }

    #[tokio::test]
    async fn test_status_error_carries_upstream_message() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            404,
            bytes::Bytes::from(r#"{"message":"Not Found"}"#),
        )));

        let err = client(&mock).fetch_user_profile("ghost").await.unwrap_err();
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::Timeout("slow".into())));

        let err = client(&mock).fetch_user_repos("octocat").await.unwrap_err();
        assert!(matches!(err, ApiError::Http(HttpError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_decode_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::text("not json"));

        let err = client(&mock).fetch_user_repos("octocat").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
