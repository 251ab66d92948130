//! Layout configuration for the plot view, dialogs, and image export.

/// Configuration for the terminal chart.
#[derive(Debug, Clone)]
pub struct ChartLayoutConfig {
    /// Fraction of the data span added around each axis (0.05 = 5% margin).
    pub axis_padding_factor: f64,
    /// Number of labels drawn along each axis.
    pub axis_label_count: usize,
}

impl Default for ChartLayoutConfig {
    fn default() -> Self {
        Self {
            axis_padding_factor: 0.05, // matches the usual plotting library margin
            axis_label_count: 5,
        }
    }
}

/// Configuration for saved images.
#[derive(Debug, Clone)]
pub struct ExportLayoutConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Radius of scatter markers in pixels.
    pub marker_radius: u32,
    /// Grid divisions along each axis.
    pub grid_lines: usize,
}

impl Default for ExportLayoutConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            marker_radius: 3,
            grid_lines: 5,
        }
    }
}

/// Configuration for popup dialogs.
#[derive(Debug, Clone)]
pub struct DialogLayoutConfig {
    /// Dialog width in characters.
    pub width: u16,
    /// Popup width as a percentage of the screen (file browser).
    pub browser_percent: u16,
}

impl Default for DialogLayoutConfig {
    fn default() -> Self {
        Self {
            width: 64,
            browser_percent: 70,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Terminal chart.
    pub chart: ChartLayoutConfig,
    /// Saved images.
    pub export: ExportLayoutConfig,
    /// Popup dialogs.
    pub dialog: DialogLayoutConfig,
}
