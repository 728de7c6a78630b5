use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

use hubdeck::adapters::{FileStore, ReqwestHttpClient};
use hubdeck::app::{App, AppMessage};
use hubdeck::cli::{parse_args, run_cli_command, CliCommand};
use hubdeck::config::AppConfig;
use hubdeck::logging::init_logging;
use hubdeck::terminal::{setup_panic_hook, TerminalManager};
use hubdeck::ui;

/// Redraw tick for the loading spinner
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    let config = AppConfig::from_env()?;

    if let Err(err) = init_logging(&config.data_dir, &config.log_filter) {
        eprintln!("Logging disabled: {}", err);
    }

    if let Some(result) = run_cli_command(&command, &config) {
        return result;
    }
    let initial_route = match command {
        CliCommand::Run { initial_route } => initial_route,
        _ => None,
    };

    if !config.admin.is_configured() {
        tracing::warn!("Admin credentials are not configured; login will always fail");
    }
    tracing::info!("Starting hubdeck against {}", config.api_base_url);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let store = Arc::new(FileStore::new(&config.data_dir));
    let http = Arc::new(ReqwestHttpClient::new());

    // Restores the terminal before the report is printed
    setup_panic_hook();
    let mut term_manager = TerminalManager::new()?;

    let result = runtime.block_on(async {
        let mut app = App::new(config, http, store);
        app.start(initial_route);
        run_app(term_manager.terminal(), &mut app).await
    });

    term_manager.restore()?;
    if let Err(ref err) = result {
        tracing::error!("Exited with error: {}", err);
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::error!("Terminal input failed: {}", err);
                        return Err(err.into());
                    }
                    // stdin closed
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }
    }
}
