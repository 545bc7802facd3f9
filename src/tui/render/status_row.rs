use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, truncate_to_width};

/// Key hints for the current input context
fn key_hints(app: &App) -> &'static str {
    if app.dialogs.notice.is_some() {
        return "any key dismiss";
    }
    if app.dialogs.confirm.is_some() {
        return "y confirm  n/Esc cancel";
    }
    match app.mode {
        Mode::Navigate => "j/k move  Space toggle  e edit  d remove  a add  q quit",
        Mode::Insert => "Enter add  Tab list  Esc list",
        Mode::Edit => "Enter save  Esc cancel  ^T toggle",
    }
}

/// Render the status row (bottom of screen): status message on the left,
/// key hints right-aligned when there is room
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(
            truncate_to_width(msg, width),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    if app.show_key_hints {
        let hint = key_hints(app);
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let hint_width = display_width(hint);
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
