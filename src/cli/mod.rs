//! Command-line interface.
//!
//! The dispatcher runs before the TUI starts:
//!
//! ```ignore
//! use hubdeck::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command, &config) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{usage_text, version_text, VERSION};

use color_eyre::Result;

use crate::adapters::FileStore;
use crate::config::AppConfig;
use crate::traits::{keys, KeyValueStore};

/// Run a CLI command if applicable.
///
/// * `None` - the command is `Run`; start the TUI
/// * `Some(Ok(()))` - the command ran; exit successfully
/// * `Some(Err(e))` - the command failed
pub fn run_cli_command(command: &CliCommand, config: &AppConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", usage_text());
            Some(Ok(()))
        }
        CliCommand::Logout => Some(forget_session(&FileStore::new(&config.data_dir))),
        CliCommand::Run { .. } => None,
    }
}

fn forget_session(store: &dyn KeyValueStore) -> Result<()> {
    store.remove(keys::USER)?;
    tracing::info!("Cleared saved session");
    println!("Sessão encerrada.");
    Ok(())
}
