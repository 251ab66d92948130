//! Keymap help bar UI component.

use crate::app::Mode;
use crate::shared::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Keymap hint for a mode.
pub fn keymap_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Menu => "←→:menu | ↑↓:item | Enter:select | Esc:close",
        Mode::CustomInput => "Tab/↑↓:field | Enter:plot | Esc:cancel | Type numbers separated by commas",
        Mode::PathPrompt => "Enter:confirm | Esc:cancel | Type a file path",
        Mode::FileBrowser => "jk/↑↓:nav | Enter/l:select | h:parent | .:hidden | Esc:cancel",
        Mode::Normal => {
            "q:quit | F10/m:menu | 1-8:graphs | i:custom | s:save | e:export | o:open | x:reset | c:color | T:theme | ?:help"
        },
    }
}

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, mode: Mode, colors: &ThemeColors) {
    let paragraph =
        Paragraph::new(keymap_text(mode)).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
