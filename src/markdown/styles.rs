//! Style constants for markdown rendering

use ratatui::style::{Color, Modifier, Style};

/// Code blocks: dim gray, whitespace preserved
pub const STYLE_CODE_BLOCK: Style = Style::new().fg(Color::DarkGray);

pub const STYLE_INLINE_CODE: Style = Style::new().fg(Color::Cyan);

pub const STYLE_HEADING: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Links: blue and underlined
pub const STYLE_LINK: Style = Style::new()
    .fg(Color::Blue)
    .add_modifier(Modifier::UNDERLINED);

/// Image placeholders stand in for pictures the terminal cannot show
pub const STYLE_IMAGE: Style = Style::new()
    .fg(Color::Magenta)
    .add_modifier(Modifier::ITALIC);

pub const STYLE_QUOTE: Style = Style::new().fg(Color::Gray).add_modifier(Modifier::ITALIC);

pub const STYLE_RULE: Style = Style::new().fg(Color::DarkGray);

pub const STYLE_TABLE_BORDER: Style = Style::new().fg(Color::DarkGray);

pub const STYLE_TABLE_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
