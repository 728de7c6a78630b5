//! Durable storage errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::traits::KeyValueStore`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not determine where to keep the store file.
    #[error("could not determine a data directory")]
    NoDataDir,

    /// Reading or writing the store file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but is not a JSON object of strings.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure injected or reported by a non-file backend.
    #[error("storage error: {0}")]
    Other(String),
}

impl StoreError {
    /// Short error code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::NoDataDir => "STORE_NO_DATA_DIR",
            StoreError::Io { .. } => "STORE_IO",
            StoreError::Serialization(_) => "STORE_SERIALIZATION",
            StoreError::Other(_) => "STORE_OTHER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_display_names_path() {
        let err = StoreError::Io {
            path: PathBuf::from("/tmp/store.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("/tmp/store.json"));
        assert!(text.contains("denied"));
        assert_eq!(err.error_code(), "STORE_IO");
    }

    #[test]
    fn test_no_data_dir_code() {
        assert_eq!(StoreError::NoDataDir.error_code(), "STORE_NO_DATA_DIR");
    }
}
