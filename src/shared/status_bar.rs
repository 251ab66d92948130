//! Status bar UI component.

use crate::shared::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    error: Option<&str>,
    colors: &ThemeColors,
) {
    let (text, fg) = match error {
        Some(message) => (message, colors.error),
        None => (status, colors.status_fg),
    };

    let paragraph = Paragraph::new(text).style(Style::default().fg(fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
