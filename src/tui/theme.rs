use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{ThemeMode, UiConfig};

/// Colour scheme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub important: Color,
    pub done: Color,
    pub archived: Color,
    pub danger: Color,
    pub selection_bg: Color,
    pub input_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            important: Color::Rgb(0xFF, 0xD7, 0x00),
            done: Color::Rgb(0x44, 0xFF, 0x88),
            archived: Color::Rgb(0xCC, 0x66, 0xFF),
            danger: Color::Rgb(0xFF, 0x44, 0x44),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            input_bg: Color::Rgb(0x1A, 0x10, 0x2E),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF4, 0xF4, 0xF8),
            text: Color::Rgb(0x2A, 0x2A, 0x3A),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            highlight: Color::Rgb(0x25, 0x63, 0xEB),
            dim: Color::Rgb(0x80, 0x80, 0x90),
            important: Color::Rgb(0xCA, 0x8A, 0x04),
            done: Color::Rgb(0x16, 0xA3, 0x4A),
            archived: Color::Rgb(0x93, 0x33, 0xEA),
            danger: Color::Rgb(0xDC, 0x26, 0x26),
            selection_bg: Color::Rgb(0xDB, 0xE4, 0xFF),
            input_bg: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }

    /// Built-in scheme for `mode` with the matching `[ui.dark]` / `[ui.light]`
    /// overrides applied. Unknown slots and bad hex values are ignored.
    pub fn for_mode(mode: ThemeMode, ui: &UiConfig) -> Self {
        match mode {
            ThemeMode::Dark => Theme::dark().with_overrides(&ui.dark),
            ThemeMode::Light => Theme::light().with_overrides(&ui.light),
        }
    }

    fn with_overrides(mut self, colors: &HashMap<String, String>) -> Self {
        for (key, value) in colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut self.background,
                "text" => &mut self.text,
                "text_bright" => &mut self.text_bright,
                "highlight" => &mut self.highlight,
                "dim" => &mut self.dim,
                "important" => &mut self.important,
                "done" => &mut self.done,
                "archived" => &mut self.archived,
                "danger" => &mut self.danger,
                "selection_bg" => &mut self.selection_bg,
                "input_bg" => &mut self.input_bg,
                _ => continue,
            };
            *slot = color;
        }
        self
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None);
        assert_eq!(parse_hex_color("#ééé"), None); // multibyte, 6 bytes
    }

    #[test]
    fn test_mode_selects_scheme() {
        let ui = UiConfig::default();
        assert_eq!(Theme::for_mode(ThemeMode::Dark, &ui), Theme::dark());
        assert_eq!(Theme::for_mode(ThemeMode::Light, &ui), Theme::light());
        assert_ne!(Theme::dark().background, Theme::light().background);
    }

    #[test]
    fn test_overrides_apply_to_matching_mode_only() {
        let mut ui = UiConfig::default();
        ui.dark.insert("background".into(), "#000000".into());
        ui.dark.insert("nonsense".into(), "#111111".into());
        ui.dark.insert("text".into(), "not a colour".into());

        let dark = Theme::for_mode(ThemeMode::Dark, &ui);
        assert_eq!(dark.background, Color::Rgb(0, 0, 0));
        assert_eq!(dark.text, Theme::dark().text);

        let light = Theme::for_mode(ThemeMode::Light, &ui);
        assert_eq!(light, Theme::light());
    }
}
