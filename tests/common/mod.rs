//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hubdeck::app::{App, AppMessage};
use hubdeck::config::AppConfig;
use hubdeck::traits::{HttpClient, KeyValueStore};
use tokio::sync::mpsc::UnboundedReceiver;

pub const ADMIN: &str = "admin";
pub const PASSWORD: &str = "s3cret";

pub fn test_config() -> AppConfig {
    AppConfig::new()
        .with_admin_credentials(ADMIN, PASSWORD)
        .with_api_base_url("https://api.test")
        .with_data_dir(std::env::temp_dir().join("hubdeck-tests"))
}

/// App wired to the given doubles; never launches a browser.
pub fn build_app(
    config: AppConfig,
    http: Arc<dyn HttpClient>,
    store: Arc<dyn KeyValueStore>,
) -> (App, UnboundedReceiver<AppMessage>) {
    let mut app = App::new(config, http, store);
    app.launch_browser = false;
    let rx = app.message_rx.take().expect("fresh app owns its receiver");
    (app, rx)
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(press(KeyCode::Char(c)));
    }
}

/// Receive `count` messages from spawned fetches and hand them to the app.
pub async fn pump(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, count: usize) {
    for _ in 0..count {
        let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("fetch result arrives")
            .expect("channel open");
        app.handle_message(msg);
    }
}

/// Receive one message without handing it to the app.
pub async fn next_message(rx: &mut UnboundedReceiver<AppMessage>) -> AppMessage {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("fetch result arrives")
        .expect("channel open")
}
