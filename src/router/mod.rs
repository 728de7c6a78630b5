//! In-app routes and the authentication guard.

use std::fmt;

use crate::session::Session;

/// A location inside the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Root,
    /// `/login`
    Login,
    /// `/listagem`, search results
    Listing,
    /// `/single-github/<username>`, profile summary with repositories
    SingleGithub(String),
    /// `/perfil/<username>`, profile card with README
    Profile(String),
    /// Any path that matches none of the above
    NotFound(String),
}

impl Route {
    /// Parse a path. Trailing slashes are ignored; a missing leading slash
    /// is tolerated.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim().trim_end_matches('/');
        let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] => Route::Root,
            ["login"] => Route::Login,
            ["listagem"] => Route::Listing,
            ["single-github", user] if !user.is_empty() => Route::SingleGithub(user.to_string()),
            ["perfil", user] if !user.is_empty() => Route::Profile(user.to_string()),
            _ => Route::NotFound(format!("/{}", trimmed)),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Listing => "/listagem".to_string(),
            Route::SingleGithub(user) => format!("/single-github/{}", user),
            Route::Profile(user) => format!("/perfil/{}", user),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Routes reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Root | Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of checking a route against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render(Route),
    Redirect(Route),
}

impl GuardDecision {
    /// The route that ends up on screen.
    pub fn target(&self) -> &Route {
        match self {
            GuardDecision::Render(route) | GuardDecision::Redirect(route) => route,
        }
    }
}

/// Public routes always render; everything else needs a session and
/// redirects to root without one.
pub fn guard(route: &Route, session: &Session) -> GuardDecision {
    if route.is_public() || session.is_authenticated() {
        GuardDecision::Render(route.clone())
    } else {
        GuardDecision::Redirect(Route::Root)
    }
}

/// [`guard`], plus sending an authenticated operator from root to the
/// listing.
pub fn resolve(route: &Route, session: &Session) -> GuardDecision {
    if session.is_authenticated() && *route == Route::Root {
        return GuardDecision::Redirect(Route::Listing);
    }
    guard(route, session)
}
