//! UI rendering for hubdeck
//!
//! The screen is split into:
//! - Left: the collapsible side panel (brand, search row, menu)
//! - Top: the header with the "Dashboard" title
//! - Rest: the content area for the current route
//!
//! A modal alert, when raised, is drawn over everything.

mod dialog;
mod helpers;
mod listing;
mod login;
mod profile;
mod repos;
mod shell;
pub mod theme;

pub use listing::{LISTING_TITLE, NO_RESULTS, REPOSITORIES_HEADING, USERS_HEADING};
pub use profile::{PROFILE_LINK, README_ABSENT, README_LOADING};
pub use shell::{panel_layout, panel_width, PanelLayout, HEADER_HEIGHT, SEARCH_ROW_HEIGHT};

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::{App, View};

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [panel_area, main_area] = Layout::horizontal([
        Constraint::Length(panel_width(app.panel_collapsed)),
        Constraint::Min(0),
    ])
    .areas(area);
    let [header_area, content_area] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
            .areas(main_area);

    shell::render_side_panel(frame, app, panel_area);
    shell::render_header(frame, app, header_area);

    match &app.view {
        View::Login(form) => login::render_login(frame, app, form, content_area),
        View::Listing => listing::render_listing(frame, app, content_area),
        View::Profile(ctrl) => profile::render_profile(frame, app, ctrl, content_area),
        View::Repos(ctrl) => repos::render_repos(frame, app, ctrl, content_area),
        View::Empty => {}
    }

    if let Some(message) = &app.alert {
        dialog::render_alert(frame, message, area);
    }
}
