//! AppMessage enum for async communication within the application.

use crate::error::ApiError;
use crate::github::{Profile, Repository, SearchResults};
use crate::views::ViewTicket;

/// Results of spawned fetches, delivered back to the event loop.
///
/// Each carries the id or ticket it was started with so a result that
/// outlived its view can be recognized and dropped.
#[derive(Debug)]
pub enum AppMessage {
    /// Both search lookups finished
    SearchCompleted {
        request_id: u64,
        result: Result<SearchResults, ApiError>,
    },
    /// Profile fetch for the profile view finished
    ProfileLoaded {
        ticket: ViewTicket,
        result: Result<Profile, ApiError>,
    },
    /// README fetch for the profile view finished
    ReadmeLoaded {
        ticket: ViewTicket,
        result: Result<String, ApiError>,
    },
    /// Profile and repositories for the repo-list view finished
    RepoListLoaded {
        ticket: ViewTicket,
        result: Result<(Profile, Vec<Repository>), ApiError>,
    },
}
