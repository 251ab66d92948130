//! File browser UI rendering.

use super::FileBrowserState;
use crate::shared::{centered_rect, ThemeColors};
use ratatui::{
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

/// Draw the file browser as a popup covering `percent` of the screen.
pub fn draw_file_browser(
    f: &mut Frame<'_>,
    state: &mut FileBrowserState,
    percent: u16,
    colors: &ThemeColors,
) {
    if !state.visible {
        return;
    }

    let area = centered_rect(percent, percent, f.area());
    f.render_widget(Clear, area);

    // Adjust scroll to keep cursor visible (subtract 2 for borders)
    let viewport_height = area.height.saturating_sub(2) as usize;
    state.adjust_scroll(viewport_height);

    let items: Vec<ListItem<'_>> = state
        .entries
        .iter()
        .enumerate()
        .skip(state.scroll)
        .take(viewport_height)
        .map(|(idx, entry)| {
            let icon = if entry.is_dir { "📁" } else { "📄" };
            let symlink_indicator = if entry.is_symlink { " →" } else { "" };
            let text = format!("{} {}{}", icon, entry.name, symlink_indicator);

            let style = if idx == state.cursor {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            ListItem::new(Line::from(text)).style(style)
        })
        .collect();

    let title = format!(
        " {}: {} ({}) ",
        state.target.title(),
        state.current_dir.display(),
        state.target.extensions().join(", ")
    );

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(list, area);
}
