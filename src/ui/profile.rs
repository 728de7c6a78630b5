//! Profile card and README rendering (`/perfil/<username>`).

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::github::Profile;
use crate::markdown::render_markdown;
use crate::views::{ProfileController, ProfileState, ReadmeState};

use super::helpers::{inner_rect, loading_line};
use super::listing::LOADING;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_STAT, COLOR_TEXT,
};

pub const PROFILE_LINK: &str = "Ver perfil no GitHub";
pub const README_LOADING: &str = "Carregando README...";
pub const README_ABSENT: &str = "README não encontrado.";

/// Card rows plus borders
const CARD_HEIGHT: u16 = 9;

pub fn render_profile(frame: &mut Frame, app: &App, ctrl: &ProfileController, area: Rect) {
    match ctrl.state() {
        ProfileState::Loading => {
            let para = Paragraph::new(loading_line(app.tick_count, LOADING)).block(titled_block(""));
            frame.render_widget(para, area);
        }
        ProfileState::Errored(message) => {
            let para = Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(COLOR_ERROR),
            )))
            .block(titled_block(""));
            frame.render_widget(para, area);
        }
        ProfileState::Loaded(profile) => {
            let [card_area, readme_area] =
                Layout::vertical([Constraint::Length(CARD_HEIGHT), Constraint::Min(0)])
                    .areas(area);
            render_card(frame, profile, card_area);
            render_readme(frame, app, ctrl, readme_area);
        }
    }
}

fn titled_block(title: &str) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    if title.is_empty() {
        return block;
    }
    block.title(Span::styled(
        format!(" {} ", title),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ))
}

fn stat(label: &str, value: String) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("{}: ", label), Style::default().fg(COLOR_DIM)),
        Span::styled(
            value,
            Style::default()
                .fg(COLOR_STAT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ]
}

fn render_card(frame: &mut Frame, profile: &Profile, area: Rect) {
    let mut stats = stat("Seguidores", profile.followers.to_string());
    stats.extend(stat("Seguindo", profile.following.to_string()));
    stats.extend(stat("Repositórios", profile.public_repos.to_string()));

    let lines = vec![
        Line::from(Span::styled(
            format!("@{}", profile.login),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.display_name().to_string(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.display_bio().to_string(),
            Style::default().fg(COLOR_TEXT),
        )),
        Line::from(stats),
        Line::from(stat("Localização", profile.display_location().to_string())),
        Line::default(),
        Line::from(vec![
            Span::styled(
                PROFILE_LINK,
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled("  [o]", Style::default().fg(COLOR_DIM)),
        ]),
    ];

    let para = Paragraph::new(lines)
        .block(titled_block(profile.title()))
        .wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

fn render_readme(frame: &mut Frame, app: &App, ctrl: &ProfileController, area: Rect) {
    let block = titled_block("README");
    frame.render_widget(block, area);
    let inner = inner_rect(area, 1);

    let para = match ctrl.readme() {
        ReadmeState::Loading => Paragraph::new(loading_line(app.tick_count, README_LOADING)),
        ReadmeState::Absent => Paragraph::new(Line::from(Span::styled(
            README_ABSENT,
            Style::default().fg(COLOR_DIM),
        ))),
        ReadmeState::Loaded(text) => Paragraph::new(render_markdown(text))
            .wrap(Wrap { trim: false })
            .scroll((ctrl.scroll(), 0)),
    };
    frame.render_widget(para, inner);
}
