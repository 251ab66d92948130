//! File browser feature - file system navigation for opening graphs and data.
//!
//! This module contains state management and business logic for browsing
//! the file system to select an image or CSV file to open. Only directories
//! and files with an accepted extension are listed.

pub mod ui;

use crate::export::{DATA_EXTENSIONS, IMAGE_EXTENSIONS};
use std::fs;
use std::path::{Path, PathBuf};

/// What the selected file will be opened as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseTarget {
    /// A PNG or JPEG graph.
    #[default]
    Image,
    /// A two-column CSV file.
    Data,
}

impl BrowseTarget {
    /// Accepted file extensions (lowercase).
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            BrowseTarget::Image => &IMAGE_EXTENSIONS,
            BrowseTarget::Data => &DATA_EXTENSIONS,
        }
    }

    /// Browser title prefix.
    pub fn title(self) -> &'static str {
        match self {
            BrowseTarget::Image => "Load graph",
            BrowseTarget::Data => "Load data",
        }
    }

    /// Whether `path` has an accepted extension.
    pub fn accepts(self, path: &Path) -> bool {
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions().contains(&ext.as_str()))
    }
}

/// One row of the listing.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path of the entry (the link itself for symlinks).
    pub path: PathBuf,
    /// Basename, or `..` for the parent row.
    pub name: String,
    /// Directory, following symlinks.
    pub is_dir: bool,
    /// Whether the entry is a symlink.
    pub is_symlink: bool,
}

/// File browser state.
#[derive(Debug)]
pub struct FileBrowserState {
    /// Whether the browser is shown.
    pub visible: bool,
    /// What the selection will be opened as.
    pub target: BrowseTarget,
    /// Current directory being browsed.
    pub current_dir: PathBuf,
    /// File entries in current directory.
    pub entries: Vec<FileEntry>,
    /// Cursor position.
    pub cursor: usize,
    /// Scroll offset.
    pub scroll: usize,
    /// Show hidden dot-prefixed entries.
    pub show_hidden: bool,
}

impl FileBrowserState {
    /// Create a new file browser state.
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            visible: false,
            target: BrowseTarget::default(),
            current_dir,
            entries: Vec::new(),
            cursor: 0,
            scroll: 0,
            show_hidden: false,
        }
    }

    /// Show the browser for `target` and list the current directory.
    pub fn open(&mut self, target: BrowseTarget) {
        self.target = target;
        self.visible = true;
        self.load_directory();
    }

    /// Hide the browser.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// List the current directory: `..` first, then directories, then
    /// accepted files, each group sorted case-insensitively.
    pub fn load_directory(&mut self) {
        self.entries = self
            .current_dir
            .parent()
            .map(|parent| FileEntry {
                path: parent.to_path_buf(),
                name: "..".to_string(),
                is_dir: true,
                is_symlink: parent.is_symlink(),
            })
            .into_iter()
            .collect();

        match self.read_entries() {
            Ok(mut listed) => {
                listed.sort_by_key(|e| (!e.is_dir, e.name.to_lowercase()));
                self.entries.extend(listed);
            },
            Err(e) => tracing::warn!("Cannot list {}: {}", self.current_dir.display(), e),
        }

        self.cursor = 0;
        self.scroll = 0;
    }

    fn read_entries(&self) -> std::io::Result<Vec<FileEntry>> {
        let mut listed = Vec::new();
        for entry in fs::read_dir(&self.current_dir)?.flatten() {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.show_hidden && name.starts_with('.') {
                continue;
            }

            // Symlinks count as directories when their target is one
            let is_symlink = path.is_symlink();
            let is_dir = fs::metadata(&path).is_ok_and(|m| m.is_dir());
            if is_dir || self.target.accepts(&path) {
                listed.push(FileEntry {
                    path,
                    name,
                    is_dir,
                    is_symlink,
                });
            }
        }
        Ok(listed)
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor down.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// Get the currently selected entry.
    pub fn current_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.cursor)
    }

    /// Enter the highlighted directory, or return the highlighted file.
    pub fn select_current(&mut self) -> Option<PathBuf> {
        let entry = self.current_entry()?;
        if !entry.is_dir {
            return Some(entry.path.clone());
        }
        let dir = entry.path.clone();
        self.change_dir(dir);
        None
    }

    /// Go up one level.
    pub fn go_to_parent(&mut self) {
        if let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) {
            self.change_dir(parent);
        }
    }

    fn change_dir(&mut self, dir: PathBuf) {
        tracing::debug!("Browsing {}", dir.display());
        self.current_dir = dir;
        self.load_directory();
    }

    /// Show or hide dot-prefixed entries.
    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        self.load_directory();
    }

    /// Scroll so the cursor row is inside a viewport of `rows` lines.
    pub fn adjust_scroll(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + rows {
            self.scroll = self.cursor + 1 - rows;
        }
    }
}

impl Default for FileBrowserState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn names(state: &FileBrowserState) -> Vec<&str> {
        state.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn lists_only_accepted_files() {
        let dir = tempdir().unwrap();
        for name in ["b.png", "a.JPG", "notes.txt", "data.csv", ".hidden.png"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("plots")).unwrap();

        let mut state = FileBrowserState::new();
        state.current_dir = dir.path().to_path_buf();

        state.open(BrowseTarget::Image);
        assert_eq!(names(&state), vec!["..", "plots", "a.JPG", "b.png"]);

        state.open(BrowseTarget::Data);
        assert_eq!(names(&state), vec!["..", "plots", "data.csv"]);

        state.toggle_hidden();
        state.open(BrowseTarget::Image);
        assert_eq!(names(&state), vec!["..", "plots", ".hidden.png", "a.JPG", "b.png"]);
    }

    #[test]
    fn select_descends_into_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("plots")).unwrap();
        fs::write(dir.path().join("plots").join("g.png"), b"").unwrap();

        let mut state = FileBrowserState::new();
        state.current_dir = dir.path().to_path_buf();
        state.open(BrowseTarget::Image);

        state.cursor_down();
        assert_eq!(state.select_current(), None);
        assert_eq!(state.current_dir, dir.path().join("plots"));

        state.cursor_down();
        assert_eq!(state.select_current(), Some(dir.path().join("plots").join("g.png")));
    }

    #[test]
    fn scroll_follows_cursor() {
        let mut state = FileBrowserState::new();
        state.entries = (0..10)
            .map(|i| FileEntry {
                path: PathBuf::from(format!("{i}.png")),
                name: format!("{i}.png"),
                is_dir: false,
                is_symlink: false,
            })
            .collect();

        for _ in 0..6 {
            state.cursor_down();
        }
        state.adjust_scroll(4);
        assert_eq!(state.scroll, 3);

        state.cursor = 1;
        state.adjust_scroll(4);
        assert_eq!(state.scroll, 1);
    }
}
