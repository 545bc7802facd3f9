use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::task_item::TaskItemController;
use crate::tui::app::{App, Mode};
use crate::util::unicode::truncate_to_width;

use super::helpers::{input_spans, spans_width};

pub const EMPTY_HINT: &str = "Nothing to do. Press a to add a task.";
const EDIT_LABEL: &str = "edit";
const CANCEL_LABEL: &str = "cancel";
const DELETE_LABEL: &str = "del";

/// Render the task list, scrolling to keep the cursor row in view
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let visible_height = area.height as usize;

    if app.items.is_empty() {
        let hint = Line::from(Span::styled(
            format!("  {}", EMPTY_HINT),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(hint).style(Style::default().bg(bg)), area);
        return;
    }

    app.clamp_cursor();
    if visible_height > 0 {
        if app.cursor < app.scroll_offset {
            app.scroll_offset = app.cursor;
        } else if app.cursor >= app.scroll_offset + visible_height {
            app.scroll_offset = app.cursor.saturating_sub(visible_height - 1);
        }
    }

    let app: &App = app;
    let list_focused = app.mode != Mode::Insert;
    let lines: Vec<Line> = app
        .items
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
        .map(|(idx, item)| {
            let is_cursor = list_focused && idx == app.cursor;
            render_row(app, item, is_cursor, area.width as usize)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn render_row(
    app: &App,
    item: &TaskItemController,
    is_cursor: bool,
    width: usize,
) -> Line<'static> {
    let theme = &app.theme;
    let task = item.task();
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);

    let mut spans = vec![
        Span::styled(
            if is_cursor { "\u{25B8} " } else { "  " },
            base.fg(theme.highlight),
        ),
        Span::styled(
            format!("[{}] ", task.checkbox_char()),
            base.fg(if task.done { theme.done } else { theme.marker }),
        ),
    ];

    let mut title_style = base.fg(theme.title_color(task.done));
    if task.done {
        title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
    }
    if is_cursor {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    // Right-hand affordances: "edit  del " (or "cancel  del " while editing)
    let edit_label = if item.is_editing() {
        CANCEL_LABEL
    } else {
        EDIT_LABEL
    };
    let delete_style = if item.is_editing() {
        base.fg(theme.dim).add_modifier(Modifier::DIM)
    } else {
        base.fg(theme.danger)
    };
    let right = vec![
        Span::styled(edit_label, base.fg(theme.text)),
        Span::styled("  ", base),
        Span::styled(DELETE_LABEL, delete_style),
        Span::styled(" ", base),
    ];

    let prefix_width = spans_width(&spans);
    let right_width = spans_width(&right);
    // One column gap between title and affordances
    let available = width.saturating_sub(prefix_width + right_width + 1);

    if item.is_editing() {
        let cursor_style = Style::default().fg(bg).bg(theme.text_bright);
        spans.extend(input_spans(
            item.draft_input(),
            available,
            title_style,
            cursor_style,
        ));
    } else {
        spans.push(Span::styled(
            truncate_to_width(item.draft(), available),
            title_style,
        ));
    }

    let used = spans_width(&spans);
    if used + right_width <= width {
        spans.push(Span::styled(" ".repeat(width - used - right_width), base));
        spans.extend(right);
    } else {
        // Too narrow for the affordances: pad the row so the cursor highlight spans it
        spans.push(Span::styled(" ".repeat(width.saturating_sub(used)), base));
    }

    Line::from(spans)
}
