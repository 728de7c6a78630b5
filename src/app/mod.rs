//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`View`] - What the content area is showing
//! - [`Focus`] - Which UI component has focus
//! - [`MenuItem`] - Side panel shortcuts
//! - [`AppMessage`] - Messages for async communication

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, MenuItem, View, MENU_ITEMS};

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::github::GithubClient;
use crate::router::Route;
use crate::session::{Session, SessionStore};
use crate::traits::{HttpClient, KeyValueStore};
use crate::views::{SearchController, TicketCounter};
use crate::widgets::InputBox;

/// Placeholder of the side panel search box.
pub const SEARCH_PLACEHOLDER: &str = "Pesquisar...";

/// Main application state
pub struct App {
    pub config: AppConfig,
    /// Session shared by every view
    pub sessions: SessionStore,
    /// GitHub client (shared across async tasks)
    pub client: Arc<GithubClient>,
    /// Durable storage for the session and the last viewed profile
    pub store: Arc<dyn KeyValueStore>,
    /// Route currently on screen, after guarding
    pub route: Route,
    /// Content area state for `route`
    pub view: View,
    /// Search results controller, kept across navigations
    pub search: SearchController,
    /// Unconfirmed text in the side panel search box
    pub search_input: InputBox,
    /// Last confirmed search term
    pub search_term: String,
    /// Whether the side panel is collapsed
    pub panel_collapsed: bool,
    pub focus: Focus,
    /// Selected index in the side panel menu
    pub menu_index: usize,
    /// Blocking modal alert; all input goes to dismissing it
    pub alert: Option<String>,
    /// Receiver for async messages
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Whether URLs are actually handed to the system browser
    pub launch_browser: bool,
    /// Every URL the operator asked to open, most recent last
    pub opened_urls: Vec<String>,
    pub should_quit: bool,
    /// Set whenever visible state changes
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    tickets: TicketCounter,
}

impl App {
    /// Build the app and restore the session from `store`.
    ///
    /// Nothing is fetched until [`App::start`] navigates somewhere.
    pub fn new(config: AppConfig, http: Arc<dyn HttpClient>, store: Arc<dyn KeyValueStore>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let client = Arc::new(GithubClient::with_base_url(http, &config.api_base_url));
        let sessions = SessionStore::initialize(Arc::clone(&store), config.admin.clone());
        let search = SearchController::new(config.search_cooldown);

        Self {
            config,
            sessions,
            client,
            store,
            route: Route::Root,
            view: View::Empty,
            search,
            search_input: InputBox::new().with_placeholder(SEARCH_PLACEHOLDER),
            search_term: String::new(),
            panel_collapsed: false,
            focus: Focus::Content,
            menu_index: 0,
            alert: None,
            message_rx: Some(message_rx),
            message_tx,
            launch_browser: true,
            opened_urls: Vec::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            tickets: TicketCounter::new(),
        }
    }

    /// Enter the initial route (root unless one was given).
    pub fn start(&mut self, initial: Option<Route>) {
        self.navigate(initial.unwrap_or(Route::Root));
    }

    pub fn session(&self) -> &Session {
        self.sessions.session()
    }

    pub fn is_authenticated(&self) -> bool {
        self.sessions.is_authenticated()
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations. Only redraws while something is loading.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether any fetch for the current screen is outstanding.
    pub fn is_loading(&self) -> bool {
        use crate::views::{ProfileState, ReadmeState, RepoListState};
        match &self.view {
            View::Listing => self.search.is_loading(),
            View::Profile(ctrl) => {
                matches!(ctrl.state(), ProfileState::Loading)
                    || matches!(ctrl.readme(), ReadmeState::Loading)
            }
            View::Repos(ctrl) => matches!(ctrl.state(), RepoListState::Loading),
            View::Login(_) | View::Empty => false,
        }
    }
}
