//! Type definitions for the application state.
//!
//! - [`View`] - What the content area is showing
//! - [`Focus`] - Which part of the screen receives keys
//! - [`MenuItem`] - Side panel navigation shortcuts

use crate::views::{LoginForm, ProfileController, RepoListController};

/// Content area state for the current route.
#[derive(Debug)]
pub enum View {
    /// `/` and `/login`
    Login(LoginForm),
    /// `/listagem`; results live in `App::search`
    Listing,
    /// `/perfil/<username>`
    Profile(ProfileController),
    /// `/single-github/<username>`
    Repos(RepoListController),
    /// Unknown route
    Empty,
}

/// Represents which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Content,
    Search,
    Menu,
}

/// Side panel shortcuts, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// "Sair" when logged in, "Login" otherwise
    Session,
    Listing,
    SingleGithub,
}

pub const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Session, MenuItem::Listing, MenuItem::SingleGithub];

impl MenuItem {
    pub fn label(self, authenticated: bool) -> &'static str {
        match self {
            MenuItem::Session if authenticated => "Sair",
            MenuItem::Session => "Login",
            MenuItem::Listing => "Listagem",
            MenuItem::SingleGithub => "Single Github",
        }
    }

    /// One-glyph form shown while the panel is collapsed.
    pub fn icon(self, authenticated: bool) -> &'static str {
        match self {
            MenuItem::Session if authenticated => "⏻",
            MenuItem::Session => "🔑",
            MenuItem::Listing => "🔍",
            MenuItem::SingleGithub => "👤",
        }
    }
}
