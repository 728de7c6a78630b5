//! Full-screen rendering driven through the app's public surface.

mod common;

use std::sync::Arc;

use hubdeck::adapters::mock::{InMemoryStore, MockHttpClient, MockResponse};
use hubdeck::app::App;
use hubdeck::error::FETCH_ERROR_MESSAGE;
use hubdeck::router::Route;
use hubdeck::traits::keys;
use hubdeck::ui::{self, PROFILE_LINK, README_ABSENT, SEARCH_ROW_HEIGHT};
use ratatui::{backend::TestBackend, Terminal};
use serde_json::json;

use common::{build_app, pump, test_config, ADMIN};

fn screen(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buf = terminal.backend().buffer().clone();
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}

fn contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

fn row_of(rows: &[String], needle: &str) -> Option<usize> {
    rows.iter().position(|row| row.contains(needle))
}

fn logged_in_store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::with_entries([(keys::USER, ADMIN)]))
}

#[tokio::test]
async fn test_profile_screen_after_fetches() {
    let http = MockHttpClient::new();
    http.set_response(
        "https://api.test/users/octocat",
        MockResponse::json(json!({
            "login": "octocat",
            "name": null,
            "bio": "Mona's friend",
            "followers": 3,
            "following": 1,
            "public_repos": 2,
            "location": "Lisboa",
            "html_url": "https://github.com/octocat"
        })),
    );
    http.set_response(
        "https://api.test/repos/octocat/octocat/readme",
        MockResponse::text("## Projetos\n\n**negrito** e `código`"),
    );
    let (mut app, mut rx) = build_app(test_config(), Arc::new(http), logged_in_store());
    app.start(Some(Route::parse("/perfil/octocat")));
    pump(&mut app, &mut rx, 2).await;

    let rows = screen(&app, 100, 30);
    assert!(contains(&rows, "@octocat"));
    assert!(contains(&rows, "Mona's friend"));
    assert!(contains(&rows, "Localização: Lisboa"));
    assert!(contains(&rows, PROFILE_LINK));
    assert!(contains(&rows, "Projetos"));
    assert!(contains(&rows, "negrito e código"));
    assert!(!contains(&rows, "**"));
}

#[tokio::test]
async fn test_profile_screen_without_readme() {
    let http = MockHttpClient::new();
    http.set_response(
        "https://api.test/users/octocat",
        MockResponse::json(json!({"login": "octocat"})),
    );
    http.set_default_response(MockResponse::status(404));
    let (mut app, mut rx) = build_app(test_config(), Arc::new(http), logged_in_store());
    app.start(Some(Route::Profile("octocat".to_string())));
    pump(&mut app, &mut rx, 2).await;

    let rows = screen(&app, 100, 30);
    assert!(contains(&rows, "Bio não informada"));
    assert!(contains(&rows, README_ABSENT));
}

#[tokio::test]
async fn test_failed_search_shows_generic_message() {
    let http = MockHttpClient::new();
    http.set_default_response(MockResponse::status(403));
    let (mut app, mut rx) = build_app(test_config(), Arc::new(http), logged_in_store());
    app.start(None);
    app.search_input.set_content("rust");
    app.confirm_search();
    pump(&mut app, &mut rx, 1).await;

    let rows = screen(&app, 100, 30);
    assert!(contains(&rows, FETCH_ERROR_MESSAGE));
    assert!(contains(&rows, "Termo: rust"));
    assert!(!contains(&rows, "mock error"));
}

#[test]
fn test_search_row_keeps_its_height_in_every_state() {
    let mut anonymous = App::new(
        test_config(),
        Arc::new(MockHttpClient::new()),
        Arc::new(InMemoryStore::new()),
    );
    anonymous.launch_browser = false;
    anonymous.navigate(Route::Root);
    let anon_rows = screen(&anonymous, 100, 30);
    let menu_row = row_of(&anon_rows, "🔑").expect("menu entry shown");

    let mut authenticated = App::new(
        test_config(),
        Arc::new(MockHttpClient::new()),
        logged_in_store(),
    );
    authenticated.launch_browser = false;
    authenticated.navigate(Route::Listing);
    let auth_rows = screen(&authenticated, 100, 30);
    assert_eq!(row_of(&auth_rows, "⏻"), Some(menu_row));

    authenticated.panel_collapsed = true;
    let collapsed_rows = screen(&authenticated, 100, 30);
    assert_eq!(row_of(&collapsed_rows, "⏻"), Some(menu_row));

    assert!(menu_row > SEARCH_ROW_HEIGHT as usize);
}
