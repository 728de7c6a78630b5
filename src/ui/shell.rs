//! Navigation shell: side panel and header.
//!
//! The side panel stacks a brand row, the search row and the menu. The
//! search row has the same height whether it holds the search box, the
//! collapsed search glyph or the blank placeholder shown to anonymous
//! users, so the menu never moves when the session changes.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus, MenuItem, MENU_ITEMS};
use crate::router::Route;
use crate::widgets::{InputBoxWidget, INPUT_HEIGHT};

use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_MENU_SELECTED_BG, COLOR_PANEL_BG,
    COLOR_TEXT,
};

pub const PANEL_WIDTH: u16 = 30;
pub const PANEL_WIDTH_COLLAPSED: u16 = 8;
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the search row in every branch.
pub const SEARCH_ROW_HEIGHT: u16 = INPUT_HEIGHT;

const BRAND_HEIGHT: u16 = 2;
const SEARCH_BUTTON_WIDTH: u16 = 10;
const SEARCH_BUTTON: &str = "Buscar";

pub fn panel_width(collapsed: bool) -> u16 {
    if collapsed {
        PANEL_WIDTH_COLLAPSED
    } else {
        PANEL_WIDTH
    }
}

/// Rows of the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub brand: Rect,
    pub search: Rect,
    pub menu: Rect,
}

/// Split the inside of the side panel. Independent of the session.
pub fn panel_layout(area: Rect) -> PanelLayout {
    let [brand, search, menu] = Layout::vertical([
        Constraint::Length(BRAND_HEIGHT),
        Constraint::Length(SEARCH_ROW_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(area);
    PanelLayout {
        brand,
        search,
        menu,
    }
}

pub fn render_side_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_PANEL_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = panel_layout(inner);
    render_brand(frame, app, layout.brand);
    render_search_row(frame, app, layout.search);
    render_menu(frame, app, layout.menu);
}

fn render_brand(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.panel_collapsed { " ◆" } else { " ◆ hubdeck" };
    let brand = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(brand, area);
}

fn render_search_row(frame: &mut Frame, app: &App, area: Rect) {
    if !app.is_authenticated() {
        // Blank placeholder of the same height
        frame.render_widget(Block::default(), area);
        return;
    }

    let focused = app.focus == Focus::Search;
    if app.panel_collapsed && focused {
        // Narrowed input, no button
        frame.render_widget(InputBoxWidget::new(&app.search_input, "", true), area);
        return;
    }
    if app.panel_collapsed {
        let glyph = Paragraph::new(Line::from(Span::styled(
            "🔍",
            Style::default().fg(COLOR_DIM),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        );
        frame.render_widget(glyph, area);
        return;
    }

    let [input_area, button_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(SEARCH_BUTTON_WIDTH),
    ])
    .areas(area);

    frame.render_widget(InputBoxWidget::new(&app.search_input, "", focused), input_area);

    let button_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let button = Paragraph::new(Line::from(Span::styled(
        SEARCH_BUTTON,
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(button_color)),
    );
    frame.render_widget(button, button_area);
}

fn menu_item_route(item: MenuItem) -> Option<Route> {
    match item {
        MenuItem::Listing => Some(Route::Listing),
        MenuItem::Session | MenuItem::SingleGithub => None,
    }
}

fn render_menu(frame: &mut Frame, app: &App, area: Rect) {
    let authenticated = app.is_authenticated();
    let lines: Vec<Line> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, &item)| {
            let text = if app.panel_collapsed {
                format!("  {}", item.icon(authenticated))
            } else {
                format!(" {}  {}", item.icon(authenticated), item.label(authenticated))
            };

            let active = menu_item_route(item).as_ref() == Some(&app.route)
                || (item == MenuItem::SingleGithub && matches!(app.route, Route::Profile(_)));
            let mut style = Style::default().fg(if active { COLOR_ACCENT } else { COLOR_TEXT });
            if app.focus == Focus::Menu && i == app.menu_index {
                style = style
                    .bg(COLOR_MENU_SELECTED_BG)
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(text, style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner_top(area));
}

/// Leave one blank row between the search row and the menu.
fn inner_top(area: Rect) -> Rect {
    Rect {
        y: area.y.saturating_add(1).min(area.y + area.height),
        height: area.height.saturating_sub(1),
        ..area
    }
}

pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let toggle = if app.panel_collapsed { "☰ " } else { "« " };
    let mut spans = vec![
        Span::styled(toggle, Style::default().fg(COLOR_DIM)),
        Span::styled(
            "Dashboard",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", app.route), Style::default().fg(COLOR_DIM)),
    ];
    if let Some(user) = app.session().user() {
        spans.push(Span::styled(
            format!("  · {}", user),
            Style::default().fg(COLOR_TEXT),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
