//! Login form rendering.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::views::{LoginField, LoginForm};
use crate::widgets::{InputBoxWidget, INPUT_HEIGHT};

use super::helpers::centered_rect;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

const FORM_WIDTH: u16 = 44;
/// Borders + two inputs + gap + button + hint
const FORM_HEIGHT: u16 = 2 + INPUT_HEIGHT * 2 + 1 + 1 + 2;

pub fn render_login(frame: &mut Frame, app: &App, form: &LoginForm, area: Rect) {
    let dialog = centered_rect(area, FORM_WIDTH, FORM_HEIGHT);
    let block = Block::default()
        .title(Span::styled(
            " Login ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let [username_area, password_area, _, button_area, _, hint_area] = Layout::vertical([
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let content_focused = app.focus == Focus::Content;
    frame.render_widget(
        InputBoxWidget::new(
            &form.username,
            "Usuário",
            content_focused && form.field() == LoginField::Username,
        ),
        username_area,
    );
    frame.render_widget(
        InputBoxWidget::new(
            &form.password,
            "Senha",
            content_focused && form.field() == LoginField::Password,
        ),
        password_area,
    );

    let button = Paragraph::new(Line::from(Span::styled(
        "[ Entrar ]",
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(button, button_area);

    let hint = Paragraph::new(Line::from(Span::styled(
        "Tab alterna campos · Enter entra",
        Style::default().fg(COLOR_DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}
