use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};

use super::helpers::input_spans;

pub const PLACEHOLDER: &str = "Add new task...";

/// Render the new-task input box
pub fn render_todo_input(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Insert && !app.dialogs.is_open();
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner_w = area.width.saturating_sub(2) as usize;

    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let placeholder_style = Style::default().fg(app.theme.dim).bg(bg);
    let cursor_style = Style::default().fg(bg).bg(app.theme.text_bright);

    let spans = if focused {
        let mut spans = input_spans(&app.new_task, inner_w, text_style, cursor_style);
        if app.new_task.is_empty() {
            spans.push(Span::styled(PLACEHOLDER, placeholder_style));
        }
        spans
    } else if app.new_task.is_empty() {
        vec![Span::styled(PLACEHOLDER, placeholder_style)]
    } else {
        vec![Span::styled(app.new_task.text().to_string(), text_style)]
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
