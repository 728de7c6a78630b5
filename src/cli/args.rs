//! Command-line argument parsing.

use crate::router::Route;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Forget the persisted session and exit
    Logout,
    /// Run the TUI, optionally starting on a route such as `/perfil/octocat`
    Run { initial_route: Option<Route> },
}

/// Parse command-line arguments and return the appropriate command.
///
/// Flags win over a route. Of several routes the last one is used;
/// unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use hubdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["hubdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut initial_route = None;
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--logout" => return CliCommand::Logout,
            path if path.starts_with('/') => initial_route = Some(Route::parse(path)),
            other => tracing::debug!("Ignoring argument {:?}", other),
        }
    }
    CliCommand::Run { initial_route }
}
