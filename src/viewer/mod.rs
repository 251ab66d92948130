//! Viewer feature - what the main window currently shows.
//!
//! The displayed view is always replaced whole: a new plot, an opened image,
//! or the welcome banner after a reset.

pub mod ui;

use crate::export::LoadedImage;
use crate::plot::PlotRequest;

/// Content of the main window.
#[derive(Debug, Clone, Default)]
pub enum View {
    /// Welcome banner.
    #[default]
    Welcome,
    /// A plotted series.
    Plot(PlotRequest),
    /// A raster image loaded from disk.
    Image(LoadedImage),
}

impl View {
    /// The displayed plot, if any.
    pub fn plot(&self) -> Option<&PlotRequest> {
        match self {
            View::Plot(request) => Some(request),
            _ => None,
        }
    }

    /// Short description for the status bar.
    pub fn describe(&self) -> String {
        match self {
            View::Welcome => "Welcome".to_string(),
            View::Plot(request) => format!(
                "{} ({} points, {})",
                request.title(),
                request.len(),
                request.mode().name()
            ),
            View::Image(image) => format!(
                "{} ({}x{})",
                image.name(),
                image.pixels.width(),
                image.pixels.height()
            ),
        }
    }
}
