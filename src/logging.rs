//! File logging.
//!
//! The TUI owns stdout, so logs go to `hubdeck.log` in the data directory.
//! The filter comes from `HUBDECK_LOG` (see [`crate::config`]).

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;

pub const LOG_FILE: &str = "hubdeck.log";

/// Install the global subscriber writing to `<data_dir>/hubdeck.log`.
///
/// An unparsable `filter` falls back to the default filter. A subscriber
/// that is already installed is left in place.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened. Callers carry on
/// without logging.
pub fn init_logging(data_dir: &Path, filter: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(data_dir)?;
    let path = data_dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_log_file_in_data_dir() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("nested");
        let path = init_logging(&data_dir, "hubdeck=debug").unwrap();
        assert_eq!(path, data_dir.join(LOG_FILE));
        assert!(path.exists());
    }

    #[test]
    fn test_unusable_data_dir_is_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "not a dir").unwrap();
        assert!(init_logging(&blocker, DEFAULT_LOG_FILTER).is_err());
    }
}
