//! Runtime configuration.
//!
//! Everything is read from the environment once at startup.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `HUBDECK_ADMIN_USERNAME` | unset (no login possible) |
//! | `HUBDECK_ADMIN_PASSWORD` | unset (no login possible) |
//! | `HUBDECK_API_URL` | `https://api.github.com` |
//! | `HUBDECK_DATA_DIR` | `~/.hubdeck` |
//! | `HUBDECK_SEARCH_COOLDOWN_MS` | `5000` |
//! | `HUBDECK_LOG` | `hubdeck=info` |

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::FileStore;
use crate::error::{AppError, AppResult};
use crate::github::GITHUB_API_URL;
use crate::session::AdminCredentials;
use crate::views::search::SEARCH_COOLDOWN;

pub const ENV_ADMIN_USERNAME: &str = "HUBDECK_ADMIN_USERNAME";
pub const ENV_ADMIN_PASSWORD: &str = "HUBDECK_ADMIN_PASSWORD";
pub const ENV_API_URL: &str = "HUBDECK_API_URL";
pub const ENV_DATA_DIR: &str = "HUBDECK_DATA_DIR";
pub const ENV_SEARCH_COOLDOWN_MS: &str = "HUBDECK_SEARCH_COOLDOWN_MS";
pub const ENV_LOG: &str = "HUBDECK_LOG";

/// Log filter used when `HUBDECK_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "hubdeck=info";

/// Application configuration.
///
/// # Example
///
/// ```ignore
/// use hubdeck::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_api_base_url("http://localhost:8080")
///     .with_search_cooldown(Duration::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub admin: AdminCredentials,
    pub api_base_url: String,
    pub data_dir: PathBuf,
    pub search_cooldown: Duration,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            admin: AdminCredentials::default(),
            api_base_url: GITHUB_API_URL.to_string(),
            data_dir: FileStore::default_data_dir()
                .unwrap_or_else(|_| PathBuf::from(crate::adapters::file_store::DATA_DIR)),
            search_cooldown: SEARCH_COOLDOWN,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_admin_credentials(mut self, username: &str, password: &str) -> Self {
        self.admin = AdminCredentials::new(Some(username.to_string()), Some(password.to_string()));
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_search_cooldown(mut self, cooldown: Duration) -> Self {
        self.search_cooldown = cooldown;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Read the configuration from process environment variables.
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let data_dir = match get(ENV_DATA_DIR) {
            Some(dir) => PathBuf::from(dir),
            None => FileStore::default_data_dir()?,
        };

        let search_cooldown = match get(ENV_SEARCH_COOLDOWN_MS) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| {
                    AppError::Config(format!(
                        "{} must be a whole number of milliseconds, got {:?}",
                        ENV_SEARCH_COOLDOWN_MS, raw
                    ))
                })?,
            None => SEARCH_COOLDOWN,
        };

        Ok(Self {
            admin: AdminCredentials::new(get(ENV_ADMIN_USERNAME), get(ENV_ADMIN_PASSWORD)),
            api_base_url: get(ENV_API_URL).unwrap_or_else(|| GITHUB_API_URL.to_string()),
            data_dir,
            search_cooldown,
            log_filter: get(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}
