//! Navigation methods for the App.
//!
//! Every route change goes through [`App::navigate`], which guards the
//! route, builds the view for it and spawns the view's fetches.

use std::sync::Arc;
use std::time::Instant;

use crate::router::{resolve, GuardDecision, Route};
use crate::views::login::INVALID_CREDENTIALS;
use crate::views::profile::last_viewed_login;
use crate::views::repos::load_repo_list;
use crate::views::search::run_search;
use crate::views::{
    LoginForm, ProfileController, RepoListController, SearchOutcome, SearchRequest, ViewTicket,
};

use super::{App, AppMessage, Focus, MenuItem, View, MENU_ITEMS};

impl App {
    /// Guard `route` against the session and show whatever it resolves to.
    pub fn navigate(&mut self, route: Route) {
        let target = match resolve(&route, self.session()) {
            GuardDecision::Render(target) => target,
            GuardDecision::Redirect(target) => {
                tracing::debug!("Redirecting {} -> {}", route, target);
                target
            }
        };
        tracing::debug!("Navigating to {}", target);

        self.view = self.enter(&target);
        self.route = target;
        if self.focus == Focus::Search && !self.is_authenticated() {
            self.focus = Focus::Content;
        }
        self.mark_dirty();
    }

    /// Build the view for an already-guarded route and start its fetches.
    fn enter(&mut self, route: &Route) -> View {
        match route {
            Route::Root | Route::Login => View::Login(LoginForm::new()),
            Route::Listing => View::Listing,
            Route::Profile(username) => {
                let ticket = self.tickets.issue();
                self.spawn_profile_fetches(ticket, username);
                View::Profile(ProfileController::new(
                    username,
                    ticket,
                    Arc::clone(&self.store),
                ))
            }
            Route::SingleGithub(username) => {
                let ticket = self.tickets.issue();
                self.spawn_repo_list_fetch(ticket, username);
                View::Repos(RepoListController::new(username, ticket))
            }
            Route::NotFound(path) => {
                tracing::warn!("No view for {}", path);
                View::Empty
            }
        }
    }

    fn spawn_profile_fetches(&self, ticket: ViewTicket, username: &str) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        let user = username.to_string();
        tokio::spawn(async move {
            let result = client.fetch_user_profile(&user).await;
            let _ = tx.send(AppMessage::ProfileLoaded { ticket, result });
        });

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        let user = username.to_string();
        tokio::spawn(async move {
            let result = client.fetch_readme(&user).await;
            let _ = tx.send(AppMessage::ReadmeLoaded { ticket, result });
        });
    }

    fn spawn_repo_list_fetch(&self, ticket: ViewTicket, username: &str) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        let user = username.to_string();
        tokio::spawn(async move {
            let result = load_repo_list(&client, &user).await;
            let _ = tx.send(AppMessage::RepoListLoaded { ticket, result });
        });
    }

    fn spawn_search(&self, request: SearchRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = run_search(&client, &request.query).await;
            let _ = tx.send(AppMessage::SearchCompleted {
                request_id: request.id,
                result,
            });
        });
    }

    /// Confirm the text in the search box ("Buscar" or Enter).
    pub fn confirm_search(&mut self) {
        self.confirm_search_at(Instant::now());
    }

    /// [`App::confirm_search`] with an explicit clock reading.
    ///
    /// The confirmed term becomes the search term; the results live on the
    /// listing, so confirming from anywhere else navigates there first.
    /// The panel is left as it is.
    pub fn confirm_search_at(&mut self, now: Instant) {
        if !self.is_authenticated() {
            return;
        }
        self.search_term = self.search_input.content().to_string();
        if self.route != Route::Listing {
            self.navigate(Route::Listing);
        }
        if let SearchOutcome::Started(request) = self.search.submit(&self.search_term, now) {
            self.spawn_search(request);
        }
        self.mark_dirty();
    }

    /// Move focus into the search box, expanding the panel if needed.
    pub fn focus_search(&mut self) {
        if !self.is_authenticated() {
            return;
        }
        self.panel_collapsed = false;
        self.focus = Focus::Search;
        self.mark_dirty();
    }

    pub fn focus_menu(&mut self) {
        self.focus = Focus::Menu;
        self.mark_dirty();
    }

    pub fn toggle_panel(&mut self) {
        self.panel_collapsed = !self.panel_collapsed;
        self.mark_dirty();
    }

    pub fn activate_menu_item(&mut self, item: MenuItem) {
        match item {
            MenuItem::Session if self.is_authenticated() => self.logout(),
            MenuItem::Session => self.navigate(Route::Login),
            MenuItem::Listing => self.navigate(Route::Listing),
            MenuItem::SingleGithub => match last_viewed_login(self.store.as_ref()) {
                Some(login) => self.navigate(Route::Profile(login)),
                None => self.navigate(Route::Listing),
            },
        }
    }

    /// Activate the menu entry under the cursor.
    pub fn activate_selected_menu_item(&mut self) {
        if let Some(item) = MENU_ITEMS.get(self.menu_index).copied() {
            self.activate_menu_item(item);
        }
    }

    /// End the session, forget its search and re-guard the current route.
    pub fn logout(&mut self) {
        self.sessions.logout();
        self.search.reset();
        self.search_term.clear();
        self.search_input.clear();
        let current = self.route.clone();
        self.navigate(current);
    }

    /// Check the login form; go to the listing or raise the alert.
    pub fn submit_login(&mut self) {
        let View::Login(form) = &self.view else {
            return;
        };
        let (username, password) = form.values();
        let (username, password) = (username.to_string(), password.to_string());

        if self.sessions.login(&username, &password) {
            self.navigate(Route::Listing);
        } else {
            self.alert = Some(INVALID_CREDENTIALS.to_string());
            self.mark_dirty();
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.mark_dirty();
    }

    /// Open `url` in the system browser.
    pub fn open_url(&mut self, url: &str) {
        tracing::info!("Opening {}", url);
        self.opened_urls.push(url.to_string());
        if self.launch_browser {
            if let Err(err) = open::that_detached(url) {
                tracing::warn!("Could not open {}: {}", url, err);
            }
        }
    }
}
