//! Search results controller (`/listagem`).
//!
//! Accepts confirmed search terms, enforces the cooldown between accepted
//! searches and holds the combined repository and user results.

use std::time::{Duration, Instant};

use crate::error::ApiError;
use crate::github::{GithubClient, GithubUser, Repository, SearchResults};

/// Minimum time between the starts of two accepted searches.
pub const SEARCH_COOLDOWN: Duration = Duration::from_millis(5000);

/// A search the caller must run and report back through
/// [`SearchController::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub id: u64,
    pub query: String,
}

/// What a submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank term: results cleared, nothing requested.
    Cleared,
    /// Inside the cooldown window: ignored.
    Suppressed,
    /// Accepted: run this request.
    Started(SearchRequest),
}

/// The row under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Repository(&'a Repository),
    User(&'a GithubUser),
}

#[derive(Debug)]
pub struct SearchController {
    cooldown: Duration,
    last_accepted: Option<Instant>,
    next_id: u64,
    in_flight: Option<u64>,
    results: SearchResults,
    /// Operator-facing text of the last failure
    failure: Option<String>,
    selected: usize,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(SEARCH_COOLDOWN)
    }
}

impl SearchController {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_accepted: None,
            next_id: 0,
            in_flight: None,
            results: SearchResults::default(),
            failure: None,
            selected: 0,
        }
    }

    /// Submit a confirmed term at time `now`.
    ///
    /// Every confirmation is a submission, including a repeat of the
    /// previous term. The cooldown runs from the start of the last accepted
    /// search whether or not it has finished.
    pub fn submit(&mut self, term: &str, now: Instant) -> SearchOutcome {
        let query = term.trim();
        if query.is_empty() {
            self.results = SearchResults::default();
            self.failure = None;
            self.in_flight = None;
            self.selected = 0;
            return SearchOutcome::Cleared;
        }

        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < self.cooldown {
                tracing::debug!("Search for {:?} suppressed by cooldown", query);
                return SearchOutcome::Suppressed;
            }
        }

        self.last_accepted = Some(now);
        self.next_id += 1;
        self.in_flight = Some(self.next_id);
        self.failure = None;
        tracing::info!("Searching GitHub for {:?}", query);

        SearchOutcome::Started(SearchRequest {
            id: self.next_id,
            query: query.to_string(),
        })
    }

    /// Record the outcome of request `id`. Returns false when the result
    /// belongs to a request that is no longer current and was dropped.
    pub fn apply(&mut self, id: u64, result: Result<SearchResults, ApiError>) -> bool {
        if self.in_flight != Some(id) {
            tracing::debug!("Dropping stale search result {}", id);
            return false;
        }
        self.in_flight = None;
        self.selected = 0;

        match result {
            Ok(results) => {
                self.results = results;
                self.failure = None;
            }
            Err(err) => {
                tracing::error!("Search failed ({}): {}", err.error_code(), err);
                self.results = SearchResults::default();
                self.failure = Some(err.user_message());
            }
        }
        true
    }

    /// Forget results, failure and any in-flight request. Request ids keep
    /// counting, so a result still on its way is dropped when it lands.
    pub fn reset(&mut self) {
        self.results = SearchResults::default();
        self.failure = None;
        self.in_flight = None;
        self.selected = 0;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    /// Idle with nothing to show and nothing wrong.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && !self.is_loading() && self.failure.is_none()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let len = self.results.len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Repositories come first, then users.
    pub fn selection(&self) -> Option<Selection<'_>> {
        let repos = &self.results.repositories;
        if self.selected < repos.len() {
            return repos.get(self.selected).map(Selection::Repository);
        }
        self.results
            .users
            .get(self.selected - repos.len())
            .map(Selection::User)
    }
}

/// Run both lookups concurrently and join them. Either failure fails the
/// whole search.
pub async fn run_search(client: &GithubClient, query: &str) -> Result<SearchResults, ApiError> {
    let (repositories, users) = tokio::join!(
        client.search_repositories(query),
        client.search_users(query)
    );
    Ok(SearchResults {
        repositories: repositories?,
        users: users?,
    })
}
