//! View controllers.
//!
//! Each controller owns the fetch lifecycle of one screen. Fetches run as
//! spawned tasks; their results come back through the app's message
//! channel tagged with the [`ViewTicket`] of the controller that asked for
//! them, and a result whose ticket no longer matches is dropped.

pub mod login;
pub mod profile;
pub mod repos;
pub mod search;

pub use login::{LoginField, LoginForm};
pub use profile::{last_viewed_login, ProfileController, ProfileState, ReadmeState};
pub use repos::{RepoListController, RepoListState};
pub use search::{SearchController, SearchOutcome, SearchRequest, Selection};

/// Identity of one view entry.
///
/// Issued from a monotonically increasing counter each time a view is
/// entered, so two entries of the same route never share a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewTicket(u64);

impl ViewTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Source of fresh [`ViewTicket`]s.
#[derive(Debug, Default)]
pub struct TicketCounter {
    next: u64,
}

impl TicketCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> ViewTicket {
        self.next += 1;
        ViewTicket(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_are_unique_and_increasing() {
        let mut counter = TicketCounter::new();
        let a = counter.issue();
        let b = counter.issue();
        assert_ne!(a, b);
        assert!(b > a);
        assert_eq!(a.value() + 1, b.value());
    }
}
