//! Version and usage text.

/// The current version of hubdeck, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("hubdeck {}", VERSION)
}

pub fn usage_text() -> String {
    format!(
        "{}
Terminal dashboard for browsing GitHub users and repositories.

USAGE:
    hubdeck [OPTIONS] [ROUTE]

ROUTE:
    /                         Login
    /listagem                 Search results
    /perfil/<username>        Profile and README
    /single-github/<username> Repository list

OPTIONS:
    --logout        Forget the saved session and exit
    -h, --help      Print this help
    -V, --version   Print the version

ENVIRONMENT:
    HUBDECK_ADMIN_USERNAME, HUBDECK_ADMIN_PASSWORD   Login credentials
    HUBDECK_API_URL             API base URL (default https://api.github.com)
    HUBDECK_DATA_DIR            Data directory (default ~/.hubdeck)
    HUBDECK_SEARCH_COOLDOWN_MS  Minimum time between searches (default 5000)
    HUBDECK_LOG                 Log filter (default hubdeck=info)",
        version_text()
    )
}
