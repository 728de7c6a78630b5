//! Plain URL styling for README text.

use once_cell::sync::Lazy;
use ratatui::{style::Style, text::Span};
use regex::Regex;

use crate::markdown::styles::STYLE_LINK;

/// Matches URLs that don't contain whitespace, angle brackets, or square brackets
static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s<>\[\]]+").expect("Invalid URL regex pattern"));

/// Split `text` into spans, giving every plain URL the link style on top of
/// `base_style`.
pub(crate) fn render_text_with_urls(text: &str, base_style: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last_end = 0;

    for m in URL_REGEX.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::styled(text[last_end..m.start()].to_string(), base_style));
        }
        spans.push(Span::styled(m.as_str().to_string(), base_style.patch(STYLE_LINK)));
        last_end = m.end();
    }

    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }

    spans
}
