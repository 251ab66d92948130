//! Dialog feature - text entry popups.
//!
//! Two dialogs share a single-line [`TextField`]: the custom data dialog
//! (X and Y fields) and the path prompt used by save and export.

pub mod ui;

use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

/// Single-line editable text with a character cursor.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    text: String,
    /// Cursor position in characters.
    cursor: usize,
}

impl TextField {
    /// Create an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor, accounting for wide characters.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.byte_index()].width()
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert a character at the cursor.
    pub fn input(&mut self, c: char) {
        let idx = self.byte_index();
        self.text.insert(idx, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index();
        self.text.remove(idx);
    }

    /// Remove the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let idx = self.byte_index();
            self.text.remove(idx);
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to the start.
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end.
    pub fn end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Clear the contents.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Which field of the custom dialog has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomField {
    /// X axis values.
    #[default]
    X,
    /// Y axis values.
    Y,
}

/// Custom data dialog state.
#[derive(Debug, Default)]
pub struct CustomDataDialog {
    /// Whether the dialog is shown.
    pub visible: bool,
    /// X axis text.
    pub x: TextField,
    /// Y axis text.
    pub y: TextField,
    /// Focused field.
    pub focus: CustomField,
    /// Last validation failure, shown under the fields.
    pub error: Option<String>,
}

impl CustomDataDialog {
    /// Create a hidden dialog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the dialog, keeping previously typed text.
    pub fn open(&mut self) {
        self.visible = true;
        self.focus = CustomField::X;
        self.error = None;
    }

    /// Hide the dialog.
    pub fn close(&mut self) {
        self.visible = false;
        self.error = None;
    }

    /// Switch focus between the two fields.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            CustomField::X => CustomField::Y,
            CustomField::Y => CustomField::X,
        };
    }

    /// The focused field.
    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            CustomField::X => &mut self.x,
            CustomField::Y => &mut self.y,
        }
    }

    /// Raw text of both fields.
    pub fn values(&self) -> (&str, &str) {
        (self.x.text(), self.y.text())
    }
}

/// What a confirmed path will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPurpose {
    /// Save the displayed figure as an image.
    SaveImage,
    /// Export the displayed data as CSV.
    ExportCsv,
}

impl PathPurpose {
    /// Dialog title.
    pub fn title(self) -> &'static str {
        match self {
            PathPurpose::SaveImage => "Save graph",
            PathPurpose::ExportCsv => "Export data",
        }
    }

    /// Hint listing accepted formats.
    pub fn hint(self) -> &'static str {
        match self {
            PathPurpose::SaveImage => "PNG files (*.png) or JPEG files (*.jpg *.jpeg)",
            PathPurpose::ExportCsv => "CSV files (*.csv)",
        }
    }

    /// Default file name.
    pub fn default_name(self) -> &'static str {
        match self {
            PathPurpose::SaveImage => "graph.png",
            PathPurpose::ExportCsv => "data.csv",
        }
    }
}

/// Path prompt state.
#[derive(Debug, Default)]
pub struct PathPrompt {
    /// Purpose of the open prompt, `None` when hidden.
    pub purpose: Option<PathPurpose>,
    /// Path being edited.
    pub field: TextField,
}

impl PathPrompt {
    /// Create a hidden prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the prompt is shown.
    pub fn is_visible(&self) -> bool {
        self.purpose.is_some()
    }

    /// Show the prompt pre-filled with the purpose's default name.
    pub fn open(&mut self, purpose: PathPurpose) {
        self.purpose = Some(purpose);
        self.field = TextField::with_text(purpose.default_name());
    }

    /// Hide the prompt.
    pub fn close(&mut self) {
        self.purpose = None;
        self.field.clear();
    }

    /// Hide the prompt and return its purpose and trimmed path, if any.
    pub fn submit(&mut self) -> Option<(PathPurpose, PathBuf)> {
        let purpose = self.purpose.take()?;
        let text = self.field.text().trim().to_string();
        self.field.clear();
        if text.is_empty() {
            return None;
        }
        Some((purpose, PathBuf::from(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_moves_cursor() {
        let mut field = TextField::new();
        for c in "1,3".chars() {
            field.input(c);
        }
        field.move_left();
        field.input('2');
        assert_eq!(field.text(), "1,23");
        assert_eq!(field.cursor(), 3);

        field.backspace();
        assert_eq!(field.text(), "1,3");
        field.home();
        field.delete();
        assert_eq!(field.text(), ",3");
        field.backspace();
        assert_eq!(field.text(), ",3");
        field.end();
        assert_eq!(field.cursor(), 2);
        field.move_right();
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn handles_multibyte_text() {
        let mut field = TextField::with_text("π,é");
        assert_eq!(field.cursor(), 3);
        field.backspace();
        assert_eq!(field.text(), "π,");
        field.home();
        field.move_right();
        assert_eq!(field.cursor_column(), 1);
    }

    #[test]
    fn cursor_column_counts_wide_characters() {
        let field = TextField::with_text("数据");
        assert_eq!(field.cursor_column(), 4);
    }

    #[test]
    fn custom_dialog_switches_fields() {
        let mut dialog = CustomDataDialog::new();
        dialog.open();
        dialog.focused_mut().input('1');
        dialog.toggle_focus();
        dialog.focused_mut().input('4');
        assert_eq!(dialog.values(), ("1", "4"));
    }

    #[test]
    fn path_prompt_submits_trimmed_path() {
        let mut prompt = PathPrompt::new();
        prompt.open(PathPurpose::ExportCsv);
        assert_eq!(prompt.field.text(), "data.csv");
        prompt.field.home();
        prompt.field.input(' ');

        let (purpose, path) = prompt.submit().unwrap();
        assert_eq!(purpose, PathPurpose::ExportCsv);
        assert_eq!(path, PathBuf::from("data.csv"));
        assert!(!prompt.is_visible());
    }

    #[test]
    fn empty_path_is_cancelled() {
        let mut prompt = PathPrompt::new();
        prompt.open(PathPurpose::SaveImage);
        prompt.field.clear();
        assert_eq!(prompt.submit(), None);
        assert!(!prompt.is_visible());
    }
}
