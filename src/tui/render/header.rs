use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::display_width;

const APP_NAME: &str = "to.do";

/// "You have 1 task" / "You have N tasks"
pub fn counter_text(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("You have {} {}", count, noun)
}

/// Render the header bar: app name on the left, task counter on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default().fg(app.theme.header_fg).bg(app.theme.header_bg);
    let width = area.width as usize;

    let counter = counter_text(app.task_count());
    let mut spans = vec![Span::styled(APP_NAME, style.add_modifier(Modifier::BOLD))];
    let used = display_width(APP_NAME) + display_width(&counter);
    // Counter is dropped when the row is too narrow for both
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
        spans.push(Span::styled(counter, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
}
