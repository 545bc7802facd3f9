use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub highlight: Color,
    pub selection_bg: Color,
    pub done: Color,
    pub marker: Color,
    pub danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1A, 0x1A, 0x1E),
            text: Color::Rgb(0xB2, 0xB2, 0xB2),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x66, 0x66, 0x66),
            header_bg: Color::Rgb(0x82, 0x57, 0xE5),
            header_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x82, 0x57, 0xE5),
            selection_bg: Color::Rgb(0x2E, 0x25, 0x4A),
            done: Color::Rgb(0x1D, 0xB8, 0x63),
            marker: Color::Rgb(0xB2, 0xB2, 0xB2),
            danger: Color::Rgb(0xE8, 0x3F, 0x5B),
        }
    }
}

/// Parse a hex color string like "#1DB863" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the `[ui.colors]` config table, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(
                    key = key.as_str(),
                    value = value.as_str(),
                    "ignoring invalid theme color"
                );
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "dim" => theme.dim = color,
                "header_bg" => theme.header_bg = color,
                "header_fg" => theme.header_fg = color,
                "highlight" => theme.highlight = color,
                "selection_bg" => theme.selection_bg = color,
                "done" => theme.done = color,
                "marker" => theme.marker = color,
                "danger" => theme.danger = color,
                _ => tracing::warn!(key = key.as_str(), "unknown theme color"),
            }
        }

        theme
    }

    /// Title color for a task
    pub fn title_color(&self, done: bool) -> Color {
        if done { self.done } else { self.text }
    }
}
