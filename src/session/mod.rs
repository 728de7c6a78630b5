//! Operator session.
//!
//! A single shared session: authenticated or not, and who. It is created
//! once from durable storage by [`SessionStore::initialize`] and changes
//! only through [`SessionStore::login`] and [`SessionStore::logout`].

use std::sync::Arc;

use crate::traits::{keys, KeyValueStore};

/// Current authentication state.
///
/// `user()` is `Some` exactly when `is_authenticated()` is true; the fields
/// are private so the two cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
    user: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated_as(user: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            user: Some(user.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}

/// The admin username and password the operator must type.
///
/// Either half may be missing, in which case no login can succeed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AdminCredentials {
    username: Option<String>,
    password: Option<String>,
}

impl AdminCredentials {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }

    pub fn is_configured(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// Exact, case-sensitive comparison. An unset secret never matches.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => u == username && p == password,
            _ => false,
        }
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Owns the session and keeps the persisted username in sync with it.
pub struct SessionStore {
    session: Session,
    credentials: AdminCredentials,
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Restore the session from the stored `user` key.
    ///
    /// A present, non-empty value means authenticated as that user. A read
    /// failure is logged and yields an anonymous session.
    pub fn initialize(store: Arc<dyn KeyValueStore>, credentials: AdminCredentials) -> Self {
        let session = match store.get(keys::USER) {
            Ok(Some(user)) if !user.is_empty() => {
                tracing::info!("Restored session for {}", user);
                Session::authenticated_as(user)
            }
            Ok(_) => Session::anonymous(),
            Err(err) => {
                tracing::warn!("Could not read stored session ({}): {}", err.error_code(), err);
                Session::anonymous()
            }
        };

        Self {
            session,
            credentials,
            store,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Check the credentials and, on a match, authenticate and persist.
    ///
    /// On a mismatch the session is left untouched.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if !self.credentials.matches(username, password) {
            tracing::info!("Rejected login attempt for {:?}", username);
            return false;
        }

        self.session = Session::authenticated_as(username);
        if let Err(err) = self.store.set(keys::USER, username) {
            tracing::warn!("Could not persist session ({}): {}", err.error_code(), err);
        }
        tracing::info!("Logged in as {}", username);
        true
    }

    /// Clear the session and the stored username. Safe to call repeatedly.
    pub fn logout(&mut self) {
        if self.session.is_authenticated() {
            tracing::info!("Logged out {}", self.session.user().unwrap_or_default());
        }
        self.session = Session::anonymous();
        if let Err(err) = self.store.remove(keys::USER) {
            tracing::warn!("Could not clear stored session ({}): {}", err.error_code(), err);
        }
    }
}
