//! Profile controller (`/perfil/<username>`).
//!
//! The profile and the README are fetched independently. A README failure
//! never affects the profile state.

use std::sync::Arc;

use crate::error::ApiError;
use crate::github::Profile;
use crate::traits::{keys, KeyValueStore};

use super::ViewTicket;

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    Loading,
    Loaded(Box<Profile>),
    /// Operator-facing text for the failure
    Errored(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeState {
    Loading,
    Loaded(String),
    Absent,
}

pub struct ProfileController {
    username: String,
    ticket: ViewTicket,
    state: ProfileState,
    readme: ReadmeState,
    scroll: u16,
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for ProfileController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileController")
            .field("username", &self.username)
            .field("ticket", &self.ticket)
            .field("state", &self.state)
            .field("readme", &self.readme)
            .finish_non_exhaustive()
    }
}

impl ProfileController {
    /// Enter the view. Both fetches start out loading; the caller spawns them.
    pub fn new(username: &str, ticket: ViewTicket, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            username: username.to_string(),
            ticket,
            state: ProfileState::Loading,
            readme: ReadmeState::Loading,
            scroll: 0,
            store,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn ticket(&self) -> ViewTicket {
        self.ticket
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn readme(&self) -> &ReadmeState {
        &self.readme
    }

    pub fn profile(&self) -> Option<&Profile> {
        match &self.state {
            ProfileState::Loaded(profile) => Some(profile.as_ref()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ProfileState::Errored(message) => Some(message),
            _ => None,
        }
    }

    /// Record the profile fetch. On success the full payload overwrites the
    /// `lastProfile` slot.
    pub fn apply_profile(&mut self, result: Result<Profile, ApiError>) {
        match result {
            Ok(profile) => {
                match serde_json::to_string(&profile) {
                    Ok(json) => {
                        if let Err(err) = self.store.set(keys::LAST_PROFILE, &json) {
                            tracing::warn!(
                                "Could not store last profile ({}): {}",
                                err.error_code(),
                                err
                            );
                        }
                    }
                    Err(err) => tracing::warn!("Could not encode profile: {}", err),
                }
                self.state = ProfileState::Loaded(Box::new(profile));
            }
            Err(err) => {
                tracing::error!(
                    "Profile fetch for {} failed ({}): {}",
                    self.username,
                    err.error_code(),
                    err
                );
                self.state = ProfileState::Errored(err.user_message());
            }
        }
    }

    /// Record the README fetch. Failures and empty bodies both mean absent.
    pub fn apply_readme(&mut self, result: Result<String, ApiError>) {
        self.readme = match result {
            Ok(text) if !text.trim().is_empty() => ReadmeState::Loaded(text),
            Ok(_) => ReadmeState::Absent,
            Err(err) if err.status() == Some(404) => {
                tracing::debug!("{} has no README", self.username);
                ReadmeState::Absent
            }
            Err(err) => {
                tracing::warn!("README for {} unavailable: {}", self.username, err);
                ReadmeState::Absent
            }
        };
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

/// Login of the profile stored under `lastProfile`, if there is one and it
/// parses.
pub fn last_viewed_login(store: &dyn KeyValueStore) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct Stored {
        login: String,
    }

    let raw = match store.get(keys::LAST_PROFILE) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!("Could not read last profile: {}", err);
            return None;
        }
    };

    match serde_json::from_str::<Stored>(&raw) {
        Ok(stored) if !stored.login.is_empty() => Some(stored.login),
        Ok(_) => None,
        Err(err) => {
            tracing::warn!("Ignoring unreadable last profile: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FETCH_ERROR_MESSAGE;
    use crate::adapters::mock::InMemoryStore;
    use crate::views::TicketCounter;
    use serde_json::json;

    fn profile(bio: serde_json::Value) -> Profile {
        serde_json::from_value(json!({
            "login": "octocat",
            "name": "The Octocat",
            "bio": bio,
            "followers": 1,
            "following": 2,
            "public_repos": 3,
            "html_url": "https://github.com/octocat",
            "blog": "https://github.blog"
        }))
        .unwrap()
    }

    fn controller(store: &InMemoryStore) -> ProfileController {
        let ticket = TicketCounter::new().issue();
        ProfileController::new("octocat", ticket, Arc::new(store.clone()))
    }

    #[test]
    fn test_starts_loading() {
        let ctrl = controller(&InMemoryStore::new());
        assert_eq!(ctrl.state(), &ProfileState::Loading);
        assert_eq!(ctrl.readme(), &ReadmeState::Loading);
        assert!(ctrl.profile().is_none());
    }

    #[test]
    fn test_success_persists_full_payload() {
        let store = InMemoryStore::new();
        let mut ctrl = controller(&store);

        ctrl.apply_profile(Ok(profile(json!("hi"))));

        assert_eq!(ctrl.profile().map(|p| p.login.as_str()), Some("octocat"));
        let stored: serde_json::Value =
            serde_json::from_str(&store.peek(keys::LAST_PROFILE).unwrap()).unwrap();
        assert_eq!(stored["login"], "octocat");
        assert_eq!(stored["blog"], "https://github.blog");
    }

    #[test]
    fn test_success_overwrites_previous_slot() {
        let store = InMemoryStore::with_entries([(keys::LAST_PROFILE, r#"{"login":"old"}"#)]);
        let mut ctrl = controller(&store);
        ctrl.apply_profile(Ok(profile(json!(null))));
        assert_eq!(last_viewed_login(&store), Some("octocat".to_string()));
    }

    #[test]
    fn test_failure_sets_errored_and_keeps_slot() {
        let store = InMemoryStore::with_entries([(keys::LAST_PROFILE, r#"{"login":"old"}"#)]);
        let mut ctrl = controller(&store);

        ctrl.apply_profile(Err(ApiError::Status {
            status: 404,
            message: "Not Found".into(),
        }));

        assert!(matches!(ctrl.state(), ProfileState::Errored(_)));
        assert_eq!(ctrl.error_message(), Some(FETCH_ERROR_MESSAGE));
        assert!(ctrl.profile().is_none());
        assert_eq!(last_viewed_login(&store), Some("old".to_string()));
    }

    #[test]
    fn test_storage_failure_does_not_block_profile() {
        let store = InMemoryStore::new();
        store.set_set_should_fail(true);
        let mut ctrl = controller(&store);
        ctrl.apply_profile(Ok(profile(json!(null))));
        assert!(ctrl.profile().is_some());
    }

    #[test]
    fn test_readme_failure_is_absent_and_independent() {
        let mut ctrl = controller(&InMemoryStore::new());
        ctrl.apply_profile(Ok(profile(json!(null))));
        ctrl.apply_readme(Err(ApiError::Status {
            status: 404,
            message: "Not Found".into(),
        }));

        assert_eq!(ctrl.readme(), &ReadmeState::Absent);
        assert!(matches!(ctrl.state(), ProfileState::Loaded(_)));
    }

    #[test]
    fn test_readme_transport_failure_is_absent() {
        let mut ctrl = controller(&InMemoryStore::new());
        ctrl.apply_readme(Err(ApiError::Http(crate::traits::HttpError::Timeout(
            "30s".into(),
        ))));
        assert_eq!(ctrl.readme(), &ReadmeState::Absent);
        assert_eq!(ctrl.state(), &ProfileState::Loading);
    }

    #[test]
    fn test_error_message_hides_upstream_text() {
        let mut ctrl = controller(&InMemoryStore::new());
        ctrl.apply_profile(Err(ApiError::Status {
            status: 500,
            message: "stack trace".into(),
        }));
        let message = ctrl.error_message().expect("errored");
        assert!(!message.contains("stack trace"));
    }

    #[test]
    fn test_readme_before_profile() {
        let mut ctrl = controller(&InMemoryStore::new());
        ctrl.apply_readme(Ok("# Hello".to_string()));
        assert_eq!(ctrl.readme(), &ReadmeState::Loaded("# Hello".to_string()));
        assert_eq!(ctrl.state(), &ProfileState::Loading);
    }

    #[test]
    fn test_empty_readme_is_absent() {
        let mut ctrl = controller(&InMemoryStore::new());
        ctrl.apply_readme(Ok("\n".to_string()));
        assert_eq!(ctrl.readme(), &ReadmeState::Absent);
    }

    #[test]
    fn test_scroll_saturates() {
        let mut ctrl = controller(&InMemoryStore::new());
        ctrl.scroll_up(3);
        assert_eq!(ctrl.scroll(), 0);
        ctrl.scroll_down(5);
        ctrl.scroll_up(2);
        assert_eq!(ctrl.scroll(), 3);
    }

    #[test]
    fn test_last_viewed_login_missing_or_corrupt() {
        assert_eq!(last_viewed_login(&InMemoryStore::new()), None);
        let corrupt = InMemoryStore::with_entries([(keys::LAST_PROFILE, "not json")]);
        assert_eq!(last_viewed_login(&corrupt), None);
        let no_login = InMemoryStore::with_entries([(keys::LAST_PROFILE, r#"{"id":1}"#)]);
        assert_eq!(last_viewed_login(&no_login), None);
    }
}
