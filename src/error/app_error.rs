//! Unified error type for the application edge.

use thiserror::Error;

use super::store::StoreError;

/// Unified error for hubdeck.
///
/// Upstream failures never reach this type: views turn an
/// [`ApiError`](super::ApiError) into its user message where it happens.
/// This covers startup (configuration, data directory, terminal).
#[derive(Debug, Error)]
pub enum AppError {
    /// Durable storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal setup or drawing failure.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl AppError {
    /// Short error code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Store(err) => err.error_code(),
            AppError::Config(_) => "CONFIG",
            AppError::Terminal(_) => "TERMINAL",
        }
    }
}

/// Type alias for Results using [`AppError`].
pub type AppResult<T> = Result<T, AppError>;
