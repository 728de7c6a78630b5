//! Markdown renderer for READMEs.
//!
//! Converts markdown text to styled ratatui Lines for the profile view.
//! Handles code blocks, inline code, bold, italic, strikethrough, headings,
//! lists, block quotes, tables, images and hyperlinks.
//!
//! Markdown links `[text](url)` and plain text URLs (regex pattern
//! `https?://[^\s<>\[\]]+`) are both styled as links.
//!
//! Raw HTML is common in GitHub READMEs and is dropped.

mod links;
mod styles;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use links::render_text_with_urls;
use styles::{
    STYLE_CODE_BLOCK, STYLE_HEADING, STYLE_IMAGE, STYLE_INLINE_CODE, STYLE_LINK, STYLE_QUOTE,
    STYLE_RULE, STYLE_TABLE_BORDER, STYLE_TABLE_HEADER,
};

/// Width of a horizontal rule.
const RULE_WIDTH: usize = 40;

/// Render markdown text to a vector of styled Lines.
///
/// Each newline in a code block becomes a separate Line object so ASCII
/// art and indentation survive.
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut out = LineBuilder::default();

    // Style stack for nested formatting
    let mut style_stack: Vec<Style> = vec![Style::default()];
    let mut in_code_block = false;
    let mut quote_depth: usize = 0;
    // One entry per open list: Some(next number) for ordered lists
    let mut list_stack: Vec<Option<u64>> = Vec::new();

    let mut in_link = false;
    let mut current_image: Option<String> = None;

    let mut in_table = false;
    let mut table_rows: Vec<Vec<String>> = Vec::new();
    let mut current_row: Vec<String> = Vec::new();
    let mut current_cell = String::new();

    for event in parser {
        let current_style = *style_stack.last().unwrap_or(&Style::default());
        match event {
            Event::Start(tag) => match tag {
                Tag::CodeBlock(_) => {
                    out.flush();
                    in_code_block = true;
                    style_stack.push(STYLE_CODE_BLOCK);
                }
                Tag::Heading { .. } => {
                    out.flush();
                    style_stack.push(STYLE_HEADING);
                }
                Tag::Strong => style_stack.push(current_style.add_modifier(Modifier::BOLD)),
                Tag::Emphasis => style_stack.push(current_style.add_modifier(Modifier::ITALIC)),
                Tag::Strikethrough => {
                    style_stack.push(current_style.add_modifier(Modifier::CROSSED_OUT))
                }
                Tag::BlockQuote { .. } => {
                    out.flush();
                    quote_depth += 1;
                    style_stack.push(STYLE_QUOTE);
                }
                Tag::List(start) => {
                    out.flush();
                    list_stack.push(start);
                }
                Tag::Item => {
                    out.flush();
                    let indent = "  ".repeat(list_stack.len().saturating_sub(1));
                    let marker = match list_stack.last_mut() {
                        Some(Some(n)) => {
                            let marker = format!("{}{}. ", indent, n);
                            *n += 1;
                            marker
                        }
                        _ => format!("{}• ", indent),
                    };
                    out.push(Span::styled(marker, current_style));
                }
                Tag::Link { .. } => {
                    in_link = true;
                    style_stack.push(current_style.patch(STYLE_LINK));
                }
                Tag::Image { .. } => {
                    current_image = Some(String::new());
                }
                Tag::Table(_) => {
                    out.flush();
                    in_table = true;
                    table_rows.clear();
                }
                Tag::TableHead | Tag::TableRow => current_row.clear(),
                Tag::TableCell => current_cell.clear(),
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::CodeBlock => {
                    out.flush();
                    out.blank();
                    in_code_block = false;
                    style_stack.pop();
                }
                TagEnd::Heading(_) => {
                    out.flush();
                    out.blank();
                    style_stack.pop();
                }
                TagEnd::Strong | TagEnd::Emphasis | TagEnd::Strikethrough => {
                    style_stack.pop();
                }
                TagEnd::BlockQuote { .. } => {
                    out.flush();
                    quote_depth = quote_depth.saturating_sub(1);
                    style_stack.pop();
                }
                TagEnd::Paragraph => {
                    out.flush();
                    if list_stack.is_empty() {
                        out.blank();
                    }
                }
                TagEnd::List(_) => {
                    out.flush();
                    list_stack.pop();
                    if list_stack.is_empty() {
                        out.blank();
                    }
                }
                TagEnd::Item => out.flush(),
                TagEnd::Link => {
                    in_link = false;
                    style_stack.pop();
                }
                TagEnd::Image => {
                    if let Some(alt) = current_image.take() {
                        let label = if alt.trim().is_empty() {
                            "[imagem]".to_string()
                        } else {
                            format!("[imagem: {}]", alt.trim())
                        };
                        out.push(Span::styled(label, STYLE_IMAGE));
                    }
                }
                TagEnd::TableCell => current_row.push(std::mem::take(&mut current_cell)),
                TagEnd::TableHead | TagEnd::TableRow => {
                    if !current_row.is_empty() {
                        table_rows.push(std::mem::take(&mut current_row));
                    }
                }
                TagEnd::Table => {
                    render_table_to_lines(&table_rows, &mut out.lines);
                    in_table = false;
                    table_rows.clear();
                }
                _ => {}
            },
            Event::Text(text_content) => {
                let text_str = text_content.to_string();

                if let Some(alt) = current_image.as_mut() {
                    alt.push_str(&text_str);
                    continue;
                }
                if in_table {
                    current_cell.push_str(&text_str);
                } else if in_code_block {
                    let mut first = true;
                    for line_content in text_str.split('\n') {
                        if !first {
                            out.break_line();
                        }
                        first = false;
                        if !line_content.is_empty() {
                            out.push(Span::styled(line_content.to_string(), current_style));
                        }
                    }
                } else if in_link {
                    if !text_str.is_empty() {
                        out.push_quoted(quote_depth, Span::styled(text_str, current_style));
                    }
                } else {
                    for (i, part) in text_str.split('\n').enumerate() {
                        if i > 0 {
                            out.break_line();
                        }
                        if !part.is_empty() {
                            for span in render_text_with_urls(part, current_style) {
                                out.push_quoted(quote_depth, span);
                            }
                        }
                    }
                }
            }
            Event::Code(code) => {
                if let Some(alt) = current_image.as_mut() {
                    alt.push_str(&code);
                } else if in_table {
                    current_cell.push_str(&code);
                } else {
                    out.push_quoted(
                        quote_depth,
                        Span::styled(code.to_string(), STYLE_INLINE_CODE),
                    );
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if current_image.is_some() {
                    continue;
                }
                if in_table {
                    current_cell.push(' ');
                } else {
                    out.break_line();
                }
            }
            Event::Rule => {
                out.flush();
                out.lines
                    .push(Line::from(Span::styled("─".repeat(RULE_WIDTH), STYLE_RULE)));
                out.blank();
            }
            // Raw HTML has no terminal rendering
            Event::Html(_) | Event::InlineHtml(_) => {}
            _ => {}
        }
    }

    out.flush();
    let mut lines = out.lines;
    while lines.len() > 1 && lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }

    // Always at least one line
    if lines.is_empty() {
        lines.push(Line::default());
    }

    lines
}

/// Accumulates spans into lines.
#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl LineBuilder {
    fn push(&mut self, span: Span<'static>) {
        self.current.push(span);
    }

    /// Push a span, prefixing fresh lines inside block quotes with a bar.
    fn push_quoted(&mut self, depth: usize, span: Span<'static>) {
        if depth > 0 && self.current.is_empty() {
            self.current
                .push(Span::styled("│ ".repeat(depth), STYLE_QUOTE));
        }
        self.current.push(span);
    }

    /// End the current line if it has content.
    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }

    /// End the current line unconditionally.
    fn break_line(&mut self) {
        self.lines.push(Line::from(std::mem::take(&mut self.current)));
    }

    /// Add a blank separator line, never two in a row.
    fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| !l.spans.is_empty()) {
            self.lines.push(Line::default());
        }
    }
}

/// Render a table to styled Lines.
///
/// Columns are sized by display width so accented text lines up.
fn render_table_to_lines(table_rows: &[Vec<String>], lines: &mut Vec<Line<'static>>) {
    let num_cols = table_rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if num_cols == 0 {
        return;
    }

    let mut col_widths: Vec<usize> = vec![3; num_cols];
    for row in table_rows {
        for (i, cell) in row.iter().enumerate() {
            col_widths[i] = col_widths[i].max(cell.trim().width());
        }
    }

    lines.push(Line::from(Span::styled(
        build_table_border(&col_widths, '┌', '┬', '┐'),
        STYLE_TABLE_BORDER,
    )));

    for (row_idx, row) in table_rows.iter().enumerate() {
        let style = if row_idx == 0 {
            STYLE_TABLE_HEADER
        } else {
            Style::default()
        };
        let mut spans: Vec<Span<'static>> = vec![Span::styled("│", STYLE_TABLE_BORDER)];
        for (col_idx, &width) in col_widths.iter().enumerate() {
            let content = row.get(col_idx).map(|c| c.trim()).unwrap_or("");
            let pad = width.saturating_sub(content.width());
            spans.push(Span::styled(
                format!(" {}{} ", content, " ".repeat(pad)),
                style,
            ));
            spans.push(Span::styled("│", STYLE_TABLE_BORDER));
        }
        lines.push(Line::from(spans));

        if row_idx == 0 && table_rows.len() > 1 {
            lines.push(Line::from(Span::styled(
                build_table_border(&col_widths, '├', '┼', '┤'),
                STYLE_TABLE_BORDER,
            )));
        }
    }

    lines.push(Line::from(Span::styled(
        build_table_border(&col_widths, '└', '┴', '┘'),
        STYLE_TABLE_BORDER,
    )));
    lines.push(Line::default());
}

fn build_table_border(col_widths: &[usize], left: char, middle: char, right: char) -> String {
    let inner: Vec<String> = col_widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, inner.join(&middle.to_string()), right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn all_text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(text_of).collect()
    }

    #[test]
    fn test_plain_text() {
        let lines = render_markdown("Hello, world!");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "Hello, world!");
    }

    #[test]
    fn test_empty_input() {
        let lines = render_markdown("");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans.is_empty());
    }

    #[test]
    fn test_bold_text() {
        let lines = render_markdown("This is **bold** text");
        assert_eq!(lines.len(), 1);
        let bold_span = lines[0]
            .spans
            .iter()
            .find(|s| s.content.contains("bold"))
            .expect("Should have bold span");
        assert!(bold_span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_nested_bold_italic() {
        let lines = render_markdown("***both***");
        let span = &lines[0].spans[0];
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
        assert!(span.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_strikethrough() {
        let lines = render_markdown("~~old~~");
        assert!(lines[0].spans[0]
            .style
            .add_modifier
            .contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_heading_styled_and_separated() {
        let lines = render_markdown("# Title\nBody");
        assert_eq!(all_text(&lines), vec!["Title", "", "Body"]);
        assert_eq!(lines[0].spans[0].style, STYLE_HEADING);
    }

    #[test]
    fn test_soft_break_is_single_line_break() {
        let lines = render_markdown("first\nsecond");
        assert_eq!(all_text(&lines), vec!["first", "second"]);
    }

    #[test]
    fn test_paragraphs_separated_by_one_blank_line() {
        let lines = render_markdown("one\n\ntwo");
        assert_eq!(all_text(&lines), vec!["one", "", "two"]);
    }

    #[test]
    fn test_code_block_preserves_whitespace() {
        let lines = render_markdown("```\n  fn main() {}\n    x\n```");
        let text = all_text(&lines);
        assert_eq!(text[0], "  fn main() {}");
        assert_eq!(text[1], "    x");
        assert_eq!(lines[0].spans[0].style, STYLE_CODE_BLOCK);
    }

    #[test]
    fn test_inline_code() {
        let lines = render_markdown("Use `cargo run` to start");
        let code = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "cargo run")
            .expect("inline code span");
        assert_eq!(code.style, STYLE_INLINE_CODE);
    }

    #[test]
    fn test_unordered_list() {
        let lines = render_markdown("- a\n- b");
        assert_eq!(all_text(&lines), vec!["• a", "• b"]);
    }

    #[test]
    fn test_ordered_list_numbers_items() {
        let lines = render_markdown("3. x\n4. y");
        assert_eq!(all_text(&lines), vec!["3. x", "4. y"]);
    }

    #[test]
    fn test_nested_list_indents() {
        let lines = render_markdown("- a\n  - b");
        assert_eq!(all_text(&lines), vec!["• a", "  • b"]);
    }

    #[test]
    fn test_block_quote_prefixed() {
        let lines = render_markdown("> quoted");
        assert_eq!(all_text(&lines), vec!["│ quoted"]);
    }

    #[test]
    fn test_image_shows_alt_text() {
        let lines = render_markdown("![build status](https://ci/badge.svg)");
        assert_eq!(all_text(&lines), vec!["[imagem: build status]"]);
    }

    #[test]
    fn test_image_without_alt() {
        let lines = render_markdown("![](https://x/y.png)");
        assert_eq!(all_text(&lines), vec!["[imagem]"]);
    }

    #[test]
    fn test_html_is_dropped() {
        let lines = render_markdown("<p align=\"center\">\n\nHi\n\n</p>");
        let text = all_text(&lines);
        assert!(text.iter().all(|l| !l.contains('<')));
        assert!(text.contains(&"Hi".to_string()));
    }

    #[test]
    fn test_markdown_link_styled() {
        let lines = render_markdown("See [docs](https://docs.rs) now");
        assert_eq!(all_text(&lines)[0], "See docs now");
        let link = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "docs")
            .expect("link span");
        assert!(link.style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_no_escape_sequences_in_output() {
        let lines = render_markdown("[a](https://a.dev) https://b.dev");
        assert!(all_text(&lines).iter().all(|l| !l.contains('\x1b')));
    }

    #[test]
    fn test_horizontal_rule() {
        let lines = render_markdown("a\n\n---\n\nb");
        assert!(all_text(&lines).contains(&"─".repeat(RULE_WIDTH)));
    }

    #[test]
    fn test_table_rendering() {
        let lines = render_markdown("| Nome | Valor |\n|---|---|\n| ação | 1 |");
        let text = all_text(&lines);
        assert!(text[0].starts_with('┌'));
        assert!(text[1].contains("Nome"));
        assert!(text[2].starts_with('├'));
        assert!(text[3].contains("ação"));
        assert!(text[4].starts_with('└'));
        // Rows line up even with multi-byte characters
        assert_eq!(text[1].width(), text[3].width());
    }

    #[test]
    fn test_table_header_style() {
        let lines = render_markdown("| H |\n|---|\n| v |");
        let header = lines[1]
            .spans
            .iter()
            .find(|s| s.content.contains('H'))
            .expect("header cell");
        assert_eq!(header.style, STYLE_TABLE_HEADER);
    }

    #[test]
    fn test_build_table_border() {
        assert_eq!(build_table_border(&[3, 1], '┌', '┬', '┐'), "┌─────┬───┐");
    }

    #[test]
    fn test_incomplete_markdown_does_not_panic() {
        for input in ["**bold", "```rust\nfn", "`code", "| a |\n|--", "[link](http"] {
            let lines = render_markdown(input);
            assert!(!lines.is_empty());
        }
    }
}
