//! Repository list controller (`/single-github/<username>`).

use crate::error::ApiError;
use crate::github::{GithubClient, Profile, Repository};

use super::ViewTicket;

#[derive(Debug, Clone, PartialEq)]
pub enum RepoListState {
    Loading,
    Loaded {
        profile: Box<Profile>,
        repos: Vec<Repository>,
    },
    /// Operator-facing text for the failure
    Errored(String),
}

#[derive(Debug)]
pub struct RepoListController {
    username: String,
    ticket: ViewTicket,
    state: RepoListState,
    selected: usize,
}

impl RepoListController {
    pub fn new(username: &str, ticket: ViewTicket) -> Self {
        Self {
            username: username.to_string(),
            ticket,
            state: RepoListState::Loading,
            selected: 0,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn ticket(&self) -> ViewTicket {
        self.ticket
    }

    pub fn state(&self) -> &RepoListState {
        &self.state
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            RepoListState::Errored(message) => Some(message),
            _ => None,
        }
    }

    pub fn apply(&mut self, result: Result<(Profile, Vec<Repository>), ApiError>) {
        self.selected = 0;
        self.state = match result {
            Ok((profile, repos)) => RepoListState::Loaded {
                profile: Box::new(profile),
                repos,
            },
            Err(err) => {
                tracing::error!(
                    "Repository list for {} failed ({}): {}",
                    self.username,
                    err.error_code(),
                    err
                );
                RepoListState::Errored(err.user_message())
            }
        };
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if let RepoListState::Loaded { repos, .. } = &self.state {
            if !repos.is_empty() {
                self.selected = (self.selected + 1).min(repos.len() - 1);
            }
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_repo(&self) -> Option<&Repository> {
        match &self.state {
            RepoListState::Loaded { repos, .. } => repos.get(self.selected),
            _ => None,
        }
    }
}

/// Fetch the profile, then its repositories.
pub async fn load_repo_list(
    client: &GithubClient,
    username: &str,
) -> Result<(Profile, Vec<Repository>), ApiError> {
    let profile = client.fetch_user_profile(username).await?;
    let repos = client.fetch_user_repos(username).await?;
    Ok((profile, repos))
}
