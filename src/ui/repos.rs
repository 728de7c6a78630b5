//! Repository list rendering (`/single-github/<username>`).

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::views::{RepoListController, RepoListState};

use super::helpers::{inner_rect, loading_line, scroll_to_keep_visible, truncate_string};
use super::listing::LOADING;
use super::theme::{
    COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_MENU_SELECTED_BG, COLOR_STAT,
    COLOR_TEXT,
};

pub const REPOSITORIES_TITLE: &str = "Repositórios";

pub fn render_repos(frame: &mut Frame, app: &App, ctrl: &RepoListController, area: Rect) {
    let title = match ctrl.state() {
        RepoListState::Loaded { profile, .. } => profile.title().to_string(),
        _ => ctrl.username().to_string(),
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(block, area);
    let inner = inner_rect(area, 1);

    let (profile, repos) = match ctrl.state() {
        RepoListState::Loading => {
            frame.render_widget(Paragraph::new(loading_line(app.tick_count, LOADING)), inner);
            return;
        }
        RepoListState::Errored(message) => {
            let para = Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(COLOR_ERROR),
            )));
            frame.render_widget(para, inner);
            return;
        }
        RepoListState::Loaded { profile, repos } => (profile, repos),
    };

    let value = Style::default()
        .fg(COLOR_STAT)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(COLOR_DIM);
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Seguidores: ", label),
            Span::styled(profile.followers.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Seguindo: ", label),
            Span::styled(profile.following.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Repositórios públicos: ", label),
            Span::styled(profile.public_repos.to_string(), value),
        ]),
        Line::default(),
        Line::from(Span::styled(
            REPOSITORIES_TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let header_len = lines.len();
    let focused = app.focus == Focus::Content;
    let description_width = (inner.width as usize).saturating_sub(30).max(10);
    for (i, repo) in repos.iter().enumerate() {
        let style = if focused && i == ctrl.selected_index() {
            Style::default()
                .bg(COLOR_MENU_SELECTED_BG)
                .fg(COLOR_HEADER)
        } else {
            Style::default().fg(COLOR_TEXT)
        };
        let mut spans = vec![Span::styled(format!("  {}", repo.name), style)];
        if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
            spans.push(Span::styled(
                format!("  {}", truncate_string(description, description_width)),
                Style::default().fg(COLOR_DIM),
            ));
        }
        lines.push(Line::from(spans));
    }

    let scroll = scroll_to_keep_visible(header_len + ctrl.selected_index(), inner.height);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}
