//! Palettes for the dark, light and orchid themes.

use crate::app::Theme;
use ratatui::style::Color;

/// Colors for every element of the window, resolved from a [`Theme`].
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Window and popup background.
    pub bg: Color,
    /// Body text and axis labels.
    pub text: Color,
    /// Titles and the focused field border.
    pub heading: Color,
    /// Dialog prompts.
    pub label: Color,
    /// Frame borders.
    pub border: Color,
    /// Highlighted menu item or list row (text).
    pub cursor_fg: Color,
    /// Highlighted menu item or list row (fill).
    pub cursor_bg: Color,
    /// Menu bar text.
    pub menu_fg: Color,
    /// Menu bar and drop-down fill.
    pub menu_bg: Color,
    /// Status line text.
    pub status_fg: Color,
    /// Status line fill.
    pub status_bg: Color,
    /// Validation and I/O errors.
    pub error: Color,
}

impl ThemeColors {
    /// Palette for `theme`.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                border: Color::Rgb(102, 92, 84),
                cursor_fg: Color::Rgb(40, 40, 40),
                cursor_bg: Color::Rgb(251, 184, 108),
                menu_fg: Color::Rgb(235, 219, 178),
                menu_bg: Color::Rgb(80, 73, 69),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                border: Color::Rgb(213, 196, 161),
                cursor_fg: Color::Rgb(251, 245, 234),
                cursor_bg: Color::Rgb(175, 58, 3),
                menu_fg: Color::Rgb(60, 56, 54),
                menu_bg: Color::Rgb(213, 196, 161),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                error: Color::Rgb(157, 0, 6),
            },
            Theme::Orchid => Self {
                bg: Color::Rgb(115, 0, 142),
                text: Color::Rgb(255, 255, 255),
                heading: Color::Rgb(255, 255, 255),
                label: Color::Rgb(240, 204, 255),
                border: Color::Rgb(207, 0, 255),
                cursor_fg: Color::Rgb(255, 255, 255),
                cursor_bg: Color::Rgb(115, 0, 142),
                menu_fg: Color::Rgb(255, 255, 255),
                menu_bg: Color::Rgb(207, 0, 255),
                status_fg: Color::Rgb(255, 255, 255),
                status_bg: Color::Rgb(80, 0, 100),
                error: Color::Rgb(255, 170, 170),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_and_errors_stand_out() {
        for theme in [Theme::GruvboxDark, Theme::GruvboxLight, Theme::Orchid] {
            let colors = ThemeColors::from_theme(&theme);
            assert_ne!(colors.cursor_fg, colors.cursor_bg, "{}", theme.name());
            assert_ne!(colors.error, colors.status_bg, "{}", theme.name());
            assert_ne!(colors.menu_fg, colors.menu_bg, "{}", theme.name());
        }
    }
}
