//! Search results rendering (`/listagem`).

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::views::SearchController;

use super::helpers::{inner_rect, loading_line, scroll_to_keep_visible};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_MENU_SELECTED_BG,
    COLOR_TEXT,
};

pub const LISTING_TITLE: &str = "Resultados da Pesquisa";
pub const REPOSITORIES_HEADING: &str = "Repositórios Encontrados";
pub const USERS_HEADING: &str = "Usuários Encontrados";
pub const NO_RESULTS: &str = "Nenhum resultado encontrado.";
pub const LOADING: &str = "Carregando...";

pub fn render_listing(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", LISTING_TITLE),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(block, area);
    let inner = inner_rect(area, 1);

    let search = &app.search;
    let mut lines: Vec<Line<'static>> = Vec::new();
    if !app.search_term.trim().is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Termo: ", Style::default().fg(COLOR_DIM)),
            Span::styled(app.search_term.clone(), Style::default().fg(COLOR_TEXT)),
        ]));
        lines.push(Line::default());
    }

    if search.is_loading() {
        lines.push(loading_line(app.tick_count, LOADING));
    } else if let Some(message) = search.error_message() {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(COLOR_ERROR),
        )));
    } else if search.is_empty() {
        lines.push(Line::from(Span::styled(
            NO_RESULTS,
            Style::default().fg(COLOR_DIM),
        )));
    } else {
        let selected_line = push_results(&mut lines, search, app.focus == Focus::Content);
        let scroll = scroll_to_keep_visible(selected_line, inner.height);
        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
        return;
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Append both result sections; returns the line index of the selection.
fn push_results(lines: &mut Vec<Line<'static>>, search: &SearchController, focused: bool) -> usize {
    let results = search.results();
    let selected = search.selected_index();
    let mut selected_line = 0;
    let heading = Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD);

    let item_style = |index: usize| {
        if focused && index == selected {
            Style::default()
                .bg(COLOR_MENU_SELECTED_BG)
                .fg(COLOR_HEADER)
        } else {
            Style::default().fg(COLOR_TEXT)
        }
    };

    lines.push(Line::from(Span::styled(REPOSITORIES_HEADING, heading)));
    for (i, repo) in results.repositories.iter().enumerate() {
        if i == selected {
            selected_line = lines.len();
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", repo.name), item_style(i)),
            Span::styled(format!("  {}", repo.html_url), Style::default().fg(COLOR_DIM)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(USERS_HEADING, heading)));
    let offset = results.repositories.len();
    for (i, user) in results.users.iter().enumerate() {
        if offset + i == selected {
            selected_line = lines.len();
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  @{}", user.login), item_style(offset + i)),
            Span::styled("  →", Style::default().fg(COLOR_ACCENT)),
        ]));
    }

    selected_line
}
