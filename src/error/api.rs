//! Upstream API error types.

use thiserror::Error;

use crate::traits::HttpError;

/// Generic message rendered in place of any upstream failure.
pub const FETCH_ERROR_MESSAGE: &str = "Erro ao buscar dados do GitHub.";

/// Errors returned by [`crate::github::GithubClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Http(#[from] HttpError),

    /// The upstream API answered with a non-2xx status.
    #[error("GitHub API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body was not valid UTF-8 text.
    #[error("invalid response body: {0}")]
    Body(String),
}

impl ApiError {
    /// Short error code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Http(HttpError::Timeout(_)) => "API_TIMEOUT",
            ApiError::Http(_) => "API_TRANSPORT",
            ApiError::Status { status: 404, .. } => "API_NOT_FOUND",
            ApiError::Status { status: 403, .. } | ApiError::Status { status: 429, .. } => {
                "API_FORBIDDEN"
            }
            ApiError::Status { .. } => "API_STATUS",
            ApiError::Decode(_) => "API_DECODE",
            ApiError::Body(_) => "API_BODY",
        }
    }

    /// The HTTP status, when the upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text shown to the operator. Always the generic message.
    pub fn user_message(&self) -> String {
        FETCH_ERROR_MESSAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_cause() {
        let err = ApiError::Status {
            status: 500,
            message: "secret internals".to_string(),
        };
        assert_eq!(err.user_message(), FETCH_ERROR_MESSAGE);
        assert!(!err.user_message().contains("secret"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ApiError::Status { status: 404, message: String::new() }.error_code(),
            "API_NOT_FOUND"
        );
        assert_eq!(
            ApiError::Status { status: 429, message: String::new() }.error_code(),
            "API_FORBIDDEN"
        );
        assert_eq!(
            ApiError::Http(HttpError::Timeout("30s".to_string())).error_code(),
            "API_TIMEOUT"
        );
        assert_eq!(
            ApiError::Http(HttpError::ConnectionFailed("x".to_string())).error_code(),
            "API_TRANSPORT"
        );
    }

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Status { status: 403, message: "rate limit".to_string() };
        assert_eq!(err.status(), Some(403));
        assert_eq!(ApiError::Body("x".to_string()).status(), None);
    }

    #[test]
    fn test_display_includes_status() {
        let err = ApiError::Status { status: 502, message: "bad gateway".to_string() };
        assert_eq!(err.to_string(), "GitHub API error (502): bad gateway");
    }

    #[test]
    fn test_decode_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
