use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_INPUT_TEXT};

/// Height of an input box including its border.
pub const INPUT_HEIGHT: u16 = 3;

/// Single-line text input.
///
/// The cursor is a character index, not a byte offset, so accented input
/// such as "São Paulo" edits correctly. Content can be masked for password
/// fields and an empty box can show a placeholder.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    content: String,
    cursor: usize,
    placeholder: Option<String>,
    masked: bool,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text shown dimmed while the box is empty.
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    /// Render every character as `*`.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character under the cursor (Delete key).
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor (Backspace key).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the text and put the cursor at the end.
    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Characters as they should appear on screen.
    fn display_chars(&self) -> Vec<char> {
        if self.masked {
            vec!['*'; self.char_count()]
        } else {
            self.content.chars().collect()
        }
    }

    pub fn render_with_title(&self, area: Rect, buf: &mut Buffer, title: &str, focused: bool) {
        let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;

        if self.is_empty() && !focused {
            if let Some(placeholder) = &self.placeholder {
                buf.set_stringn(
                    inner.x,
                    inner.y,
                    placeholder,
                    width,
                    Style::default().fg(COLOR_DIM),
                );
            }
            return;
        }

        // keep the cursor cell on screen
        let offset = (self.cursor + 1).saturating_sub(width);
        let chars = self.display_chars();
        let visible: String = chars.iter().skip(offset).take(width).collect();
        buf.set_stringn(
            inner.x,
            inner.y,
            &visible,
            width,
            Style::default().fg(COLOR_INPUT_TEXT),
        );

        if focused {
            let cursor_x = (self.cursor - offset) as u16;
            let cursor_char = chars.get(self.cursor).copied().unwrap_or(' ');
            buf.set_string(
                inner.x + cursor_x,
                inner.y,
                cursor_char.to_string(),
                Style::default().fg(ratatui::style::Color::Black).bg(COLOR_ACCENT),
            );
        }
    }
}

/// Widget wrapper so an [`InputBox`] can be passed to `Frame::render_widget`.
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    focused: bool,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str, focused: bool) -> Self {
        Self {
            input_box,
            title,
            focused,
        }
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input_box
            .render_with_title(area, buf, self.title, self.focused);
    }
}
