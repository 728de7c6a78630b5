//! Modal alert.
//!
//! A centered frame drawn over everything else. While it is up the key
//! handler routes all input to dismissing it.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::centered_rect;
use super::theme::{COLOR_DIALOG_BG, COLOR_DIALOG_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

const DIALOG_MIN_WIDTH: u16 = 30;
const DIALOG_MAX_WIDTH: u16 = 60;

/// Dialog width for `area`: half the screen, within bounds.
fn dialog_width(area_width: u16) -> u16 {
    (area_width / 2)
        .clamp(DIALOG_MIN_WIDTH, DIALOG_MAX_WIDTH)
        .min(area_width.saturating_sub(4))
}

/// Clear the background, draw the border and return the inner area.
pub fn render_dialog_frame(frame: &mut Frame, area: Rect, title: &str, content_height: u16) -> Rect {
    let dialog_area = centered_rect(area, dialog_width(area.width), content_height + 2);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_DIALOG_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

pub fn render_alert(frame: &mut Frame, message: &str, area: Rect) {
    let inner = render_dialog_frame(frame, area, "Aviso", 4);
    let lines = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(COLOR_TEXT))),
        Line::default(),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(COLOR_DIM))),
    ];
    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}
