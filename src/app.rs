//! Application state and logic.
//!
//! Menu entries and shortcuts become calls on [`App`]. Plot data always comes
//! from the pure core ([`crate::curves`], [`crate::custom`]) and replaces the
//! current view whole; file actions work on whatever view is on screen.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::clipboard;
use crate::config::LayoutConfig;
use crate::curves::{self, CurveKind};
use crate::custom;
use crate::dialog::{CustomDataDialog, PathPrompt, PathPurpose};
use crate::error::{GraphError, Result};
use crate::export::{self, IMAGE_EXTENSIONS};
use crate::file_browser::{BrowseTarget, FileBrowserState};
use crate::menu::{MenuAction, MenuState};
use crate::plot::PlotRequest;
use crate::viewer::View;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    #[value(name = "dark")]
    GruvboxDark,
    /// Gruvbox light theme.
    #[value(name = "light")]
    GruvboxLight,
    /// Purple window with a magenta menu bar.
    #[value(name = "orchid")]
    Orchid,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::Orchid,
            Theme::Orchid => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
            Theme::Orchid => "Orchid",
        }
    }
}

/// Which component receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Shortcuts act on the main window.
    Normal,
    /// A drop-down menu is open.
    Menu,
    /// The custom data dialog is open.
    CustomInput,
    /// The save/export path prompt is open.
    PathPrompt,
    /// The file browser is open.
    FileBrowser,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// What the main window shows.
    pub view: View,
    /// Menu bar state.
    pub menu: MenuState,
    /// Custom data dialog.
    pub custom: CustomDataDialog,
    /// Save/export path prompt.
    pub prompt: PathPrompt,
    /// File browser state.
    pub file_browser: FileBrowserState,
    /// Status message.
    pub status: String,
    /// Error message, shown instead of the status until the next success.
    pub error_message: Option<String>,
    /// Current theme.
    pub theme: Theme,
    /// Layout tunables.
    pub layout: LayoutConfig,
}

impl App {
    /// Create a new application instance, optionally opening a file.
    pub fn new(file_path: Option<PathBuf>, theme: Theme) -> Self {
        let mut app = Self {
            view: View::Welcome,
            menu: MenuState::new(),
            custom: CustomDataDialog::new(),
            prompt: PathPrompt::new(),
            file_browser: FileBrowserState::new(),
            status: "Ready".to_string(),
            error_message: None,
            theme,
            layout: LayoutConfig::default(),
        };

        if let Some(path) = file_path {
            app.open_path(&path);
        }

        app
    }

    /// Component that currently owns the keyboard.
    pub fn mode(&self) -> Mode {
        if self.file_browser.visible {
            Mode::FileBrowser
        } else if self.prompt.is_visible() {
            Mode::PathPrompt
        } else if self.custom.visible {
            Mode::CustomInput
        } else if self.menu.open {
            Mode::Menu
        } else {
            Mode::Normal
        }
    }

    /// Run a menu action.
    pub fn apply(&mut self, action: MenuAction) {
        tracing::debug!("Menu action {:?}", action);
        match action {
            MenuAction::Plot(kind) => self.plot_curve(kind),
            MenuAction::Custom => self.open_custom_dialog(),
            MenuAction::Save => self.request_path(PathPurpose::SaveImage),
            MenuAction::Export => self.request_path(PathPurpose::ExportCsv),
            MenuAction::OpenImage => self.browse(BrowseTarget::Image),
            MenuAction::OpenData => self.browse(BrowseTarget::Data),
            MenuAction::Reset => self.reset_view(),
        }
    }

    /// Activate the highlighted menu entry.
    pub fn activate_menu(&mut self) {
        if let Some(action) = self.menu.activate() {
            self.apply(action);
        }
    }

    /// Show a catalog curve.
    pub fn plot_curve(&mut self, kind: CurveKind) {
        self.show_plot(curves::generate(kind));
    }

    /// Replace the view with `request`.
    pub fn show_plot(&mut self, request: PlotRequest) {
        tracing::info!("Plotting '{}' ({} points)", request.title(), request.len());
        self.view = View::Plot(request);
        self.succeed(self.view.describe());
    }

    /// Return to the welcome banner.
    pub fn reset_view(&mut self) {
        self.view = View::Welcome;
        self.succeed("View reset");
    }

    /// Open the custom data dialog.
    pub fn open_custom_dialog(&mut self) {
        self.custom.open();
        self.status = "Enter X and Y values separated by commas".to_string();
    }

    /// Validate the dialog's text and plot it, or keep the dialog open with
    /// the reason it was rejected.
    pub fn submit_custom(&mut self) {
        let (x_text, y_text) = self.custom.values();
        match custom::parse_custom(x_text, y_text) {
            Ok(request) => {
                self.custom.close();
                self.show_plot(request);
            },
            Err(e) => {
                tracing::warn!("Rejected custom data: {}", e);
                self.custom.error = Some(e.to_string());
                self.fail(e.to_string());
            },
        }
    }

    /// Ask for a destination path, if there is something to write.
    pub fn request_path(&mut self, purpose: PathPurpose) {
        let available = match purpose {
            PathPurpose::SaveImage => !matches!(self.view, View::Welcome),
            PathPurpose::ExportCsv => self.view.plot().is_some(),
        };

        if available {
            self.prompt.open(purpose);
            self.status = format!("{}: {}", purpose.title(), purpose.hint());
        } else {
            let action = match purpose {
                PathPurpose::SaveImage => "save",
                PathPurpose::ExportCsv => "export",
            };
            self.fail(GraphError::NoActiveView { action }.to_string());
        }
    }

    /// Confirm the path prompt.
    pub fn submit_path(&mut self) {
        let Some((purpose, path)) = self.prompt.submit() else {
            self.status = "Cancelled".to_string();
            return;
        };

        match purpose {
            PathPurpose::SaveImage => {
                let result = self.save_current(&path);
                self.report(result, format!("Graph saved successfully to {}", path.display()));
            },
            PathPurpose::ExportCsv => {
                let result = self.export_current(&path);
                self.report(
                    result,
                    format!("Data exported successfully to {}", path.display()),
                );
            },
        }
    }

    /// Save the displayed plot or image.
    pub fn save_current(&self, path: &Path) -> Result<()> {
        match &self.view {
            View::Plot(request) => export::save_plot(request, path, &self.layout.export),
            View::Image(image) => export::save_raster(image, path),
            View::Welcome => Err(GraphError::NoActiveView { action: "save" }),
        }
    }

    /// Export the displayed plot's data as CSV.
    pub fn export_current(&self, path: &Path) -> Result<()> {
        let request = self
            .view
            .plot()
            .ok_or(GraphError::NoActiveView { action: "export" })?;
        export::write_csv(path, request.x(), request.y())?;
        tracing::info!("Exported {} rows to {}", request.len(), path.display());
        Ok(())
    }

    /// Open the file browser.
    pub fn browse(&mut self, target: BrowseTarget) {
        self.file_browser.open(target);
        self.status = format!("{}: {}", target.title(), self.file_browser.current_dir.display());
    }

    /// Navigate to selected file/directory in browser.
    pub fn browser_select(&mut self) {
        if let Some(path) = self.file_browser.select_current() {
            let target = self.file_browser.target;
            self.file_browser.close();
            match target {
                BrowseTarget::Image => self.open_image(&path),
                BrowseTarget::Data => self.open_data(&path),
            }
        }
    }

    /// Navigate to parent directory in file browser.
    pub fn browser_parent(&mut self) {
        self.file_browser.go_to_parent();
        self.status = format!("Browsing: {}", self.file_browser.current_dir.display());
    }

    /// Toggle show hidden files.
    pub fn toggle_hidden(&mut self) {
        self.file_browser.toggle_hidden();
        self.status = format!(
            "Show hidden: {}",
            if self.file_browser.show_hidden {
                "ON"
            } else {
                "OFF"
            }
        );
    }

    /// Open an image or CSV file, chosen by extension.
    pub fn open_path(&mut self, path: &Path) {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            self.open_image(path);
        } else if BrowseTarget::Data.accepts(path) {
            self.open_data(path);
        } else {
            self.fail(GraphError::unsupported_format(extension).to_string());
        }
    }

    /// Show an image file.
    pub fn open_image(&mut self, path: &Path) {
        match export::load_image(path) {
            Ok(image) => {
                self.remember_dir(path);
                self.view = View::Image(image);
                self.succeed("Graph loaded successfully!");
            },
            Err(e) => self.fail(format!("Error loading graph: {}", e)),
        }
    }

    /// Plot a CSV file.
    pub fn open_data(&mut self, path: &Path) {
        match export::read_plot(path) {
            Ok(request) => {
                self.remember_dir(path);
                self.show_plot(request);
            },
            Err(e) => self.fail(format!("Error loading data: {}", e)),
        }
    }

    fn remember_dir(&mut self, path: &Path) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.file_browser.current_dir = parent.to_path_buf();
        }
    }

    /// Change the displayed plot's color.
    pub fn cycle_color(&mut self) {
        if let View::Plot(request) = &self.view {
            let color = request.color().next();
            self.view = View::Plot(request.clone().with_color(color));
            self.status = format!("Color: {}", color.name());
        } else {
            self.status = "No graph to recolor".to_string();
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy the displayed plot's data to the clipboard.
    pub fn copy_data(&mut self) {
        let result = self
            .view
            .plot()
            .ok_or(GraphError::NoActiveView { action: "copy" })
            .and_then(clipboard::copy_plot);
        self.report(result, "Data copied!".to_string());
    }

    /// Close whichever popup is open.
    pub fn close_overlay(&mut self) {
        self.file_browser.close();
        self.prompt.close();
        self.custom.close();
        self.menu.close();
    }

    fn report(&mut self, result: Result<()>, success: String) {
        match result {
            Ok(()) => self.succeed(success),
            Err(e) => {
                tracing::error!("{}", e);
                self.fail(e.to_string());
            },
        }
    }

    fn succeed(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.error_message = None;
    }

    fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.status = message.clone();
        self.error_message = Some(message);
    }
}
