use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode::display_width;

use super::centered_rect_fixed;

const DISMISS_HINT: &str = "Press any key to continue";

/// Render whichever dialog is open. A notice takes precedence over a confirmation.
pub fn render_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let popup_w: u16 = 48.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let (title, message, accent, footer) = if let Some(notice) = &app.dialogs.notice {
        let footer = Line::from(Span::styled(format!(" {}", DISMISS_HINT), dim_style));
        (&notice.title, &notice.message, app.theme.danger, footer)
    } else if let Some(confirm) = &app.dialogs.confirm {
        let prompt = &confirm.prompt;
        let key_style = Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD);
        let footer = Line::from(vec![
            Span::styled(" n", key_style),
            Span::styled(format!(" {}   ", prompt.decline_label), text_style),
            Span::styled("y", key_style),
            Span::styled(format!(" {}", prompt.affirm_label), text_style),
        ]);
        (&prompt.title, &prompt.message, app.theme.highlight, footer)
    } else {
        return;
    };

    let header_style = Style::default()
        .fg(accent)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(format!(" {}", title), header_style)),
        Line::from(Span::styled("", text_style)),
    ];
    for s in wrap_text(" ", message, inner_w) {
        lines.push(Line::from(Span::styled(s, text_style)));
    }
    lines.push(Line::from(Span::styled("", text_style)));
    lines.push(footer);

    // Dynamic height from content + 2 for borders
    let popup_h = ((lines.len() as u16) + 2).min(area.height);
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let paragraph = Paragraph::new(lines)
        .block(popup_block(accent, bg))
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

fn popup_block(accent: Color, bg: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent).bg(bg))
        .style(Style::default().bg(bg))
}

/// Word-wrap `text` into lines of at most `max_width` cells.
/// Every line (including the first) is prefixed with `indent`.
fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_w = display_width(indent);
    let mut lines = Vec::new();
    let mut current = indent.to_string();
    let mut current_w = indent_w;

    for word in text.split_whitespace() {
        let word_w = display_width(word);
        let space = if current_w == indent_w { 0 } else { 1 };
        if current_w + space + word_w > max_width && current_w > indent_w {
            lines.push(std::mem::replace(&mut current, indent.to_string()));
            current_w = indent_w;
        }
        if current_w > indent_w {
            current.push(' ');
            current_w += 1;
        }
        current.push_str(word);
        current_w += word_w;
    }
    if current_w > indent_w || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskId;
    use crate::ops::task_store::{Notice, Notifier};
    use crate::tui::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text(" ", "Are you sure you want to remove this item?", 20),
            vec![" Are you sure you", " want to remove this", " item?"]
        );
        assert_eq!(wrap_text(" ", "", 20), vec![" "]);
    }

    #[test]
    fn confirm_dialog_shows_prompt_and_choices() {
        let mut app = app_with(&["Buy milk"]);
        app.store.remove(TaskId(1), &mut app.dialogs);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_dialog(frame, &app, area);
        });
        assert!(output.contains("Remove item"));
        assert!(output.contains("Are you sure you want to remove this item?"));
        assert!(output.contains("n No   y Yes"));
    }

    #[test]
    fn notice_dialog_shows_message_and_hint() {
        let mut app = app_with(&["Buy milk"]);
        app.dialogs.notify(Notice::duplicate_title());
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_dialog(frame, &app, area);
        });
        assert!(output.contains("Task already registered"));
        assert!(output.contains("You cannot register a task with the same name"));
        assert!(output.contains(DISMISS_HINT));
    }

    #[test]
    fn nothing_drawn_without_dialog() {
        let app = app_with(&["Buy milk"]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_dialog(frame, &app, area);
        });
        assert_eq!(output, "");
    }
}
