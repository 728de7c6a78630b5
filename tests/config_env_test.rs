//! Configuration read from the real process environment.

use std::path::PathBuf;
use std::time::Duration;

use hubdeck::config::{
    AppConfig, ENV_ADMIN_PASSWORD, ENV_ADMIN_USERNAME, ENV_API_URL, ENV_DATA_DIR, ENV_LOG,
    ENV_SEARCH_COOLDOWN_MS,
};
use hubdeck::error::AppError;
use serial_test::serial;

const ALL_VARS: [&str; 6] = [
    ENV_ADMIN_USERNAME,
    ENV_ADMIN_PASSWORD,
    ENV_API_URL,
    ENV_DATA_DIR,
    ENV_SEARCH_COOLDOWN_MS,
    ENV_LOG,
];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_env();
    std::env::set_var(ENV_ADMIN_USERNAME, "admin");
    std::env::set_var(ENV_ADMIN_PASSWORD, "s3cret");
    std::env::set_var(ENV_API_URL, "http://127.0.0.1:8080");
    std::env::set_var(ENV_DATA_DIR, "/tmp/hubdeck-env-test");
    std::env::set_var(ENV_SEARCH_COOLDOWN_MS, "1200");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert!(config.admin.matches("admin", "s3cret"));
    assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
    assert_eq!(config.data_dir, PathBuf::from("/tmp/hubdeck-env-test"));
    assert_eq!(config.search_cooldown, Duration::from_millis(1200));
}

#[test]
#[serial]
fn test_from_env_without_credentials() {
    clear_env();
    std::env::set_var(ENV_DATA_DIR, "/tmp/hubdeck-env-test");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert!(!config.admin.is_configured());
    assert!(!config.admin.matches("", ""));
    assert_eq!(config.search_cooldown, Duration::from_secs(5));
}

#[test]
#[serial]
fn test_from_env_rejects_bad_cooldown() {
    clear_env();
    std::env::set_var(ENV_DATA_DIR, "/tmp/hubdeck-env-test");
    std::env::set_var(ENV_SEARCH_COOLDOWN_MS, "-5");

    let result = AppConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(AppError::Config(_))));
}
