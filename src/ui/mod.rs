//! User interface rendering.
//!
//! Layout, top to bottom: menu bar, main view, status bar, keymap bar.
//! Popups (menu drop-down, dialogs, file browser) are drawn last.

use crate::app::App;
use crate::dialog::ui::{draw_custom_dialog, draw_path_prompt};
use crate::file_browser::ui::draw_file_browser;
use crate::menu::ui::{draw_menu_bar, draw_menu_dropdown};
use crate::shared::{draw_keymap, draw_status, ThemeColors};
use crate::viewer::ui::draw_view;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_menu_bar(f, chunks[0], &app.menu, &colors);
    draw_view(f, chunks[1], &app.view, &app.layout.chart, &colors);
    draw_status(
        f,
        chunks[2],
        &app.status,
        app.error_message.as_deref(),
        &colors,
    );
    draw_keymap(f, chunks[3], app.mode(), &colors);

    // Overlays
    draw_menu_dropdown(f, chunks[0], &app.menu, &colors);
    draw_custom_dialog(f, &app.custom, app.layout.dialog.width, &colors);
    draw_path_prompt(f, &app.prompt, app.layout.dialog.width, &colors);
    draw_file_browser(
        f,
        &mut app.file_browser,
        app.layout.dialog.browser_percent,
        &colors,
    );
}
