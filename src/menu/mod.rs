//! Menu bar feature - the window's four drop-down menus.
//!
//! This module holds the static menu layout and the navigation state. Picking
//! an entry produces a [`MenuAction`]; the application decides what it does.

pub mod ui;

use crate::curves::CurveKind;

/// What a menu entry asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Show a catalog curve.
    Plot(CurveKind),
    /// Open the custom data dialog.
    Custom,
    /// Save the displayed figure as an image.
    Save,
    /// Export the displayed data as CSV.
    Export,
    /// Browse for an image to display.
    OpenImage,
    /// Browse for a CSV file to plot.
    OpenData,
    /// Return to the welcome screen.
    Reset,
}

/// One entry in a drop-down.
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    /// Text shown in the drop-down.
    pub label: &'static str,
    /// Shortcut shown next to the label.
    pub shortcut: &'static str,
    /// Action triggered on selection.
    pub action: MenuAction,
}

/// A titled drop-down.
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    /// Title shown in the bar.
    pub title: &'static str,
    /// Entries in display order.
    pub items: &'static [MenuItem],
}

const fn item(label: &'static str, shortcut: &'static str, action: MenuAction) -> MenuItem {
    MenuItem {
        label,
        shortcut,
        action,
    }
}

/// The menu bar, left to right.
pub static MENUS: [Menu; 4] = [
    Menu {
        title: "File",
        items: &[
            item("Save graph", "s", MenuAction::Save),
            item("Export data to CSV", "e", MenuAction::Export),
            item("Open graph", "o", MenuAction::OpenImage),
            item("Open data", "O", MenuAction::OpenData),
        ],
    },
    Menu {
        title: "Early-prepared graphs",
        items: &[
            item("Linear graph", "1", MenuAction::Plot(CurveKind::Linear)),
            item("Sinus graph", "2", MenuAction::Plot(CurveKind::Sine)),
            item("Cosine graph", "3", MenuAction::Plot(CurveKind::Cosine)),
            item("Squared graph", "4", MenuAction::Plot(CurveKind::Quadratic)),
            item("Exp graph", "5", MenuAction::Plot(CurveKind::Exponential)),
            item("Log graph", "6", MenuAction::Plot(CurveKind::Logarithmic)),
            item("Dotty graph", "7", MenuAction::Plot(CurveKind::ScatterRandom)),
        ],
    },
    Menu {
        title: "Plot graph",
        items: &[item("Custom", "i", MenuAction::Custom)],
    },
    Menu {
        title: "Additionally",
        items: &[
            item("Random graph", "8", MenuAction::Plot(CurveKind::RandomNoise)),
            item("Reset view", "x", MenuAction::Reset),
        ],
    },
];

/// Menu bar navigation state.
#[derive(Debug, Default)]
pub struct MenuState {
    /// Whether a drop-down is open.
    pub open: bool,
    /// Index into [`MENUS`].
    pub selected_menu: usize,
    /// Index into the open menu's items.
    pub selected_item: usize,
}

impl MenuState {
    /// Create a new, closed menu state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the drop-down of the last used menu.
    pub fn open(&mut self) {
        self.open = true;
        self.selected_item = 0;
    }

    /// Close the drop-down.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// The menu currently highlighted.
    pub fn current_menu(&self) -> &'static Menu {
        &MENUS[self.selected_menu]
    }

    /// Move to the menu on the right, wrapping.
    pub fn next_menu(&mut self) {
        self.selected_menu = (self.selected_menu + 1) % MENUS.len();
        self.selected_item = 0;
    }

    /// Move to the menu on the left, wrapping.
    pub fn prev_menu(&mut self) {
        self.selected_menu = (self.selected_menu + MENUS.len() - 1) % MENUS.len();
        self.selected_item = 0;
    }

    /// Move cursor up, wrapping.
    pub fn cursor_up(&mut self) {
        let len = self.current_menu().items.len();
        self.selected_item = (self.selected_item + len - 1) % len;
    }

    /// Move cursor down, wrapping.
    pub fn cursor_down(&mut self) {
        let len = self.current_menu().items.len();
        self.selected_item = (self.selected_item + 1) % len;
    }

    /// Close the drop-down and return the highlighted entry's action.
    pub fn activate(&mut self) -> Option<MenuAction> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.current_menu()
            .items
            .get(self.selected_item)
            .map(|item| item.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_curve_is_reachable_from_the_menus() {
        for kind in CurveKind::ALL {
            let found = MENUS
                .iter()
                .flat_map(|m| m.items.iter())
                .any(|i| i.action == MenuAction::Plot(kind) && i.label == kind.title());
            assert!(found, "{} missing from menus", kind.id());
        }
    }

    #[test]
    fn navigation_wraps() {
        let mut menu = MenuState::new();
        menu.open();
        menu.prev_menu();
        assert_eq!(menu.current_menu().title, "Additionally");
        menu.next_menu();
        assert_eq!(menu.current_menu().title, "File");

        menu.cursor_up();
        assert_eq!(menu.selected_item, MENUS[0].items.len() - 1);
        menu.cursor_down();
        assert_eq!(menu.selected_item, 0);
    }

    #[test]
    fn activate_returns_action_and_closes() {
        let mut menu = MenuState::new();
        assert_eq!(menu.activate(), None);

        menu.open();
        menu.next_menu();
        menu.cursor_down();
        assert_eq!(menu.activate(), Some(MenuAction::Plot(CurveKind::Sine)));
        assert!(!menu.open);
    }
}
