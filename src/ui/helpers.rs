//! Helper functions and constants for UI rendering

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
};

use super::theme::COLOR_LOADING;

/// Spinner frames for loading indicators
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks per spinner frame (the loop ticks every 16ms)
const TICKS_PER_FRAME: u64 = 6;

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn spinner_frame(tick_count: u64) -> &'static str {
    SPINNER_FRAMES[((tick_count / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

/// "⠋ Carregando..." style line.
pub fn loading_line(tick_count: u64, text: &str) -> Line<'static> {
    let style = Style::default().fg(COLOR_LOADING);
    Line::from(vec![
        Span::styled(format!("{} ", spinner_frame(tick_count)), style),
        Span::styled(text.to_string(), style),
    ])
}

/// Truncate a string to `max_chars` characters, adding "..." if truncated.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// First line to show so that `selected` stays inside a window of `height` lines.
pub fn scroll_to_keep_visible(selected: usize, height: u16) -> u16 {
    let height = height.max(1) as usize;
    selected.saturating_sub(height - 1).min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_rect() {
        let r = inner_rect(Rect::new(0, 0, 10, 6), 1);
        assert_eq!(r, Rect::new(1, 1, 8, 4));
    }

    #[test]
    fn test_centered_rect() {
        let r = centered_rect(Rect::new(0, 0, 20, 10), 10, 4);
        assert_eq!(r, Rect::new(5, 3, 10, 4));
    }

    #[test]
    fn test_centered_rect_clamps() {
        let r = centered_rect(Rect::new(2, 2, 8, 4), 20, 20);
        assert_eq!(r, Rect::new(2, 2, 8, 4));
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(TICKS_PER_FRAME), SPINNER_FRAMES[1]);
        assert_eq!(
            spinner_frame(TICKS_PER_FRAME * SPINNER_FRAMES.len() as u64),
            SPINNER_FRAMES[0]
        );
    }

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("ação", 10), "ação");
        assert_eq!(truncate_string("repositório", 8), "repos...");
    }

    #[test]
    fn test_scroll_to_keep_visible() {
        assert_eq!(scroll_to_keep_visible(0, 5), 0);
        assert_eq!(scroll_to_keep_visible(4, 5), 0);
        assert_eq!(scroll_to_keep_visible(7, 5), 3);
        assert_eq!(scroll_to_keep_visible(3, 0), 3);
    }
}
