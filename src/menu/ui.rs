//! Menu bar UI rendering.

use super::{MenuState, MENUS};
use crate::shared::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the menu bar across `area`.
pub fn draw_menu_bar(f: &mut Frame<'_>, area: Rect, state: &MenuState, colors: &ThemeColors) {
    let spans: Vec<Span<'_>> = MENUS
        .iter()
        .enumerate()
        .map(|(idx, menu)| {
            let style = if state.open && idx == state.selected_menu {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.menu_fg).bg(colors.menu_bg)
            };
            Span::styled(format!(" {} ", menu.title), style)
        })
        .collect();

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.menu_bg));
    f.render_widget(paragraph, area);
}

/// Column where menu `index` starts in the bar.
fn title_offset(index: usize) -> u16 {
    MENUS
        .iter()
        .take(index)
        .map(|m| m.title.width() as u16 + 2)
        .sum()
}

/// Draw the open drop-down below the bar at `bar`.
pub fn draw_menu_dropdown(f: &mut Frame<'_>, bar: Rect, state: &MenuState, colors: &ThemeColors) {
    if !state.open {
        return;
    }

    let menu = state.current_menu();
    let label_width = menu
        .items
        .iter()
        .map(|i| i.label.width())
        .max()
        .unwrap_or(0);

    let screen = f.area();
    let width = (label_width as u16 + 8).min(screen.width);
    let height = (menu.items.len() as u16 + 2).min(screen.height.saturating_sub(bar.y + 1));
    let x = (bar.x + title_offset(state.selected_menu)).min(screen.width.saturating_sub(width));
    let area = Rect {
        x,
        y: bar.y + 1,
        width,
        height,
    };

    let items: Vec<ListItem<'_>> = menu
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let text = format!(
                " {:<w$}  {} ",
                item.label,
                item.shortcut,
                w = label_width
            );
            let style = if idx == state.selected_item {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.menu_fg)
            };
            ListItem::new(Line::from(text)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.menu_bg)),
    );

    f.render_widget(Clear, area);
    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_account_for_padding() {
        assert_eq!(title_offset(0), 0);
        assert_eq!(title_offset(1), "File".len() as u16 + 2);
        assert_eq!(
            title_offset(2),
            ("File".len() + "Early-prepared graphs".len() + 4) as u16
        );
    }
}
