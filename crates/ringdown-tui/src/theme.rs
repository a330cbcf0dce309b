//! Color palette for the ringdown screen.
//!
//! Neon-on-navy defaults; the accent and alert colors can be overridden
//! from the TOML config.

use ratatui::style::Color;
use tracing::warn;

use ringdown_core::UiConfig;

/// Built-in palette constants.
mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::Rgb(0x10, 0x12, 0x45);
    pub const ACCENT: Color = Color::Rgb(0x02, 0xe4, 0xe9);
    pub const ALERT: Color = Color::Rgb(0xff, 0x07, 0x3a);
    pub const TEXT_MUTED: Color = Color::Rgb(0x5c, 0x60, 0x8a);
}

/// Resolved palette used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub accent: Color,
    pub alert: Color,
    pub text_muted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: colors::BACKGROUND,
            accent: colors::ACCENT,
            alert: colors::ALERT,
            text_muted: colors::TEXT_MUTED,
        }
    }
}

impl Palette {
    /// Apply config overrides on top of the defaults. An unparseable color
    /// keeps the default rather than failing startup.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut palette = Self::default();
        match parse_hex(&ui.accent_color) {
            Some(color) => palette.accent = color,
            None => warn!(value = %ui.accent_color, "ignoring invalid ui.accent_color"),
        }
        match parse_hex(&ui.alert_color) {
            Some(color) => palette.alert = color,
            None => warn!(value = %ui.alert_color, "ignoring invalid ui.alert_color"),
        }
        palette
    }
}

fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let n = u32::from_str_radix(hex, 16).ok()?;
    Some(Color::Rgb((n >> 16) as u8, (n >> 8) as u8, n as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_hex("#02e4e9"), Some(Color::Rgb(0x02, 0xe4, 0xe9)));
        assert_eq!(parse_hex("#FF073A"), Some(Color::Rgb(0xff, 0x07, 0x3a)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex("02e4e9"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#gggggg"), None);
    }

    #[test]
    fn invalid_override_keeps_the_default() {
        let ui = UiConfig {
            accent_color: "teal".into(),
            alert_color: "#123456".into(),
        };
        let palette = Palette::from_config(&ui);
        assert_eq!(palette.accent, colors::ACCENT);
        assert_eq!(palette.alert, Color::Rgb(0x12, 0x34, 0x56));
    }
}
