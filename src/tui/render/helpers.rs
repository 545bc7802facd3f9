use ratatui::style::Style;
use ratatui::text::Span;
use unicode_segmentation::UnicodeSegmentation;

use crate::util::text_input::TextInput;
use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Spans for a single-line input with an inverted-cell cursor. The text is
/// scrolled horizontally so the cursor stays inside `width` cells.
pub(super) fn input_spans(
    input: &TextInput,
    width: usize,
    text_style: Style,
    cursor_style: Style,
) -> Vec<Span<'static>> {
    if width == 0 {
        return Vec::new();
    }
    let text = input.text();
    let cursor_col = input.cursor_col();
    // Never skip past the cursor itself
    let skip = (cursor_col + 1).saturating_sub(width).min(cursor_col);
    let visible = unicode::skip_cols(text, skip);
    let offset = input.cursor() - (text.len() - visible.len());
    let (before, rest) = visible.split_at(offset);

    let mut spans = Vec::new();
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), text_style));
    }
    match rest.graphemes(true).next() {
        Some(g) => {
            spans.push(Span::styled(g.to_string(), cursor_style));
            let after = &rest[g.len()..];
            if !after.is_empty() {
                spans.push(Span::styled(after.to_string(), text_style));
            }
        }
        None => spans.push(Span::styled(" ".to_string(), cursor_style)),
    }
    spans
}
