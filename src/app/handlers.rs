//! Message and key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::router::Route;
use crate::views::{LoginField, Selection};

use super::{App, AppMessage, Focus, View, MENU_ITEMS};

/// Lines moved per PageUp/PageDown on the profile view.
const PAGE_SCROLL: u16 = 10;

impl App {
    /// Handle an incoming async message.
    ///
    /// Results tagged with a ticket other than the current view's are
    /// dropped.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::SearchCompleted { request_id, result } => {
                self.search.apply(request_id, result);
            }
            AppMessage::ProfileLoaded { ticket, result } => match &mut self.view {
                View::Profile(ctrl) if ctrl.ticket() == ticket => ctrl.apply_profile(result),
                _ => tracing::debug!("Dropping stale profile result {}", ticket.value()),
            },
            AppMessage::ReadmeLoaded { ticket, result } => match &mut self.view {
                View::Profile(ctrl) if ctrl.ticket() == ticket => ctrl.apply_readme(result),
                _ => tracing::debug!("Dropping stale README result {}", ticket.value()),
            },
            AppMessage::RepoListLoaded { ticket, result } => match &mut self.view {
                View::Repos(ctrl) if ctrl.ticket() == ticket => ctrl.apply(result),
                _ => tracing::debug!("Dropping stale repository list {}", ticket.value()),
            },
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.quit();
            return;
        }

        // the alert swallows everything until dismissed
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return;
        }

        if ctrl {
            match key.code {
                KeyCode::Char('b') => self.toggle_panel(),
                KeyCode::Char('f') => self.focus_search(),
                KeyCode::Char('g') => self.focus_menu(),
                _ => {}
            }
            return;
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Menu => self.handle_menu_key(key),
            Focus::Content => self.handle_content_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.confirm_search(),
            KeyCode::Esc => self.focus = Focus::Content,
            KeyCode::Tab => self.focus = Focus::Menu,
            KeyCode::Backspace => self.search_input.backspace(),
            KeyCode::Delete => self.search_input.delete_char(),
            KeyCode::Left => self.search_input.move_cursor_left(),
            KeyCode::Right => self.search_input.move_cursor_right(),
            KeyCode::Home => self.search_input.move_cursor_home(),
            KeyCode::End => self.search_input.move_cursor_end(),
            KeyCode::Char(c) => self.search_input.insert_char(c),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_index = self.menu_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_index = (self.menu_index + 1).min(MENU_ITEMS.len() - 1);
            }
            KeyCode::Enter => self.activate_selected_menu_item(),
            KeyCode::Esc | KeyCode::Tab => self.focus = Focus::Content,
            _ => {}
        }
    }

    fn handle_content_key(&mut self, key: KeyEvent) {
        if matches!(self.view, View::Login(_)) {
            self.handle_login_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('/') => {
                self.focus_search();
                return;
            }
            KeyCode::Tab => {
                if self.is_authenticated() {
                    self.focus_search();
                } else {
                    self.focus_menu();
                }
                return;
            }
            _ => {}
        }

        let mut open = None;
        match &mut self.view {
            View::Listing => {
                self.handle_listing_key(key);
                return;
            }
            View::Profile(ctrl) => match key.code {
                KeyCode::Down | KeyCode::Char('j') => ctrl.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => ctrl.scroll_up(1),
                KeyCode::PageDown => ctrl.scroll_down(PAGE_SCROLL),
                KeyCode::PageUp => ctrl.scroll_up(PAGE_SCROLL),
                KeyCode::Char('o') | KeyCode::Enter => {
                    open = ctrl.profile().map(|p| p.html_url.clone());
                }
                _ => {}
            },
            View::Repos(ctrl) => match key.code {
                KeyCode::Down | KeyCode::Char('j') => ctrl.select_next(),
                KeyCode::Up | KeyCode::Char('k') => ctrl.select_previous(),
                KeyCode::Enter => open = ctrl.selected_repo().map(|r| r.html_url.clone()),
                _ => {}
            },
            View::Login(_) | View::Empty => {}
        }

        if let Some(url) = open.filter(|url| !url.is_empty()) {
            self.open_url(&url);
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.submit_login();
            return;
        }
        let View::Login(form) = &mut self.view else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Up if form.field() == LoginField::Password => form.toggle_field(),
            KeyCode::Down if form.field() == LoginField::Username => form.toggle_field(),
            KeyCode::Backspace => form.active_input().backspace(),
            KeyCode::Delete => form.active_input().delete_char(),
            KeyCode::Left => form.active_input().move_cursor_left(),
            KeyCode::Right => form.active_input().move_cursor_right(),
            KeyCode::Home => form.active_input().move_cursor_home(),
            KeyCode::End => form.active_input().move_cursor_end(),
            KeyCode::Char(c) => form.active_input().insert_char(c),
            _ => {}
        }
    }

    fn handle_listing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.search.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.search.select_previous(),
            KeyCode::Enter => {
                let target = match self.search.selection() {
                    Some(Selection::Repository(repo)) => Err(repo.html_url.clone()),
                    Some(Selection::User(user)) => Ok(Route::Profile(user.login.clone())),
                    None => return,
                };
                match target {
                    Ok(route) => self.navigate(route),
                    Err(url) => self.open_url(&url),
                }
            }
            _ => {}
        }
    }
}
