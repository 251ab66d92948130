//! Plot requests handed to the rendering boundary.
//!
//! A [`PlotRequest`] is the fully resolved data and styling for one figure.
//! Construction checks that both series are non-empty and of equal length, so
//! every consumer (terminal chart, image export, CSV export) can rely on it.

use crate::error::{GraphError, Result};
use ratatui::style::Color;

/// How the series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotMode {
    /// Connected line through the points in order.
    #[default]
    Line,
    /// Unconnected markers.
    Scatter,
}

impl PlotMode {
    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            PlotMode::Line => "line",
            PlotMode::Scatter => "scatter",
        }
    }
}

/// Series color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotColor {
    /// Magenta, the color every built-in graph starts with.
    #[default]
    Magenta,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Red.
    Red,
    /// Orange.
    Orange,
}

impl PlotColor {
    /// Get the next color in the cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Magenta => Self::Blue,
            Self::Blue => Self::Green,
            Self::Green => Self::Red,
            Self::Red => Self::Orange,
            Self::Orange => Self::Magenta,
        }
    }

    /// Get color name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Magenta => "Magenta",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Orange => "Orange",
        }
    }

    /// RGB triple shared by the terminal and bitmap renderers.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Magenta => (191, 0, 191),
            Self::Blue => (31, 119, 180),
            Self::Green => (44, 160, 44),
            Self::Red => (214, 39, 40),
            Self::Orange => (255, 127, 14),
        }
    }

    /// Terminal color.
    pub fn to_color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }
}

/// Axis-aligned data bounds, `[min, max]` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// X range.
    pub x: [f64; 2],
    /// Y range.
    pub y: [f64; 2],
}

/// Resolved data and styling for one figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
    x: Vec<f64>,
    y: Vec<f64>,
    title: String,
    color: PlotColor,
    mode: PlotMode,
}

impl PlotRequest {
    /// Build a request, checking the series invariant.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidSeries`] if either series is empty or the
    /// lengths differ.
    pub fn new(x: Vec<f64>, y: Vec<f64>, title: impl Into<String>, mode: PlotMode) -> Result<Self> {
        if x.is_empty() || x.len() != y.len() {
            return Err(GraphError::InvalidSeries {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self::from_series(x, y, title, mode))
    }

    /// Build a request from series already known to be valid.
    pub(crate) fn from_series(
        x: Vec<f64>,
        y: Vec<f64>,
        title: impl Into<String>,
        mode: PlotMode,
    ) -> Self {
        debug_assert!(!x.is_empty() && x.len() == y.len());
        Self {
            x,
            y,
            title: title.into(),
            color: PlotColor::default(),
            mode,
        }
    }

    /// Replace the series color.
    pub fn with_color(mut self, color: PlotColor) -> Self {
        self.color = color;
        self
    }

    /// X values.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Y values.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Figure title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Series color.
    pub fn color(&self) -> PlotColor {
        self.color
    }

    /// Draw mode.
    pub fn mode(&self) -> PlotMode {
        self.mode
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Points as `(x, y)` pairs.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }

    /// Finite data bounds with `padding` (a fraction of the span) added on
    /// each side. Degenerate spans are widened so renderers never get an
    /// empty range.
    pub fn bounds(&self, padding: f64) -> Bounds {
        Bounds {
            x: padded_range(&self.x, padding),
            y: padded_range(&self.y, padding),
        }
    }
}

fn padded_range(values: &[f64], padding: f64) -> [f64; 2] {
    let (min, max) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });

    if !min.is_finite() {
        return [0.0, 1.0];
    }

    let span = max - min;
    if span == 0.0 {
        let half = if min == 0.0 { 1.0 } else { min.abs() * 0.5 };
        return [min - half, max + half];
    }

    [min - span * padding, max + span * padding]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_series() {
        let err = PlotRequest::new(vec![1.0, 2.0], vec![1.0], "t", PlotMode::Line).unwrap_err();
        assert!(matches!(err, GraphError::InvalidSeries { x_len: 2, y_len: 1 }));
    }

    #[test]
    fn rejects_empty_series() {
        let err = PlotRequest::new(vec![], vec![], "t", PlotMode::Line).unwrap_err();
        assert!(matches!(err, GraphError::InvalidSeries { x_len: 0, y_len: 0 }));
    }

    #[test]
    fn bounds_pad_the_span() {
        let req = PlotRequest::new(vec![0.0, 10.0], vec![-1.0, 1.0], "t", PlotMode::Line).unwrap();
        let bounds = req.bounds(0.1);
        assert_eq!(bounds.x, [-1.0, 11.0]);
        assert!((bounds.y[0] + 1.2).abs() < 1e-12);
        assert!((bounds.y[1] - 1.2).abs() < 1e-12);
    }

    #[test]
    fn bounds_widen_flat_series() {
        let req = PlotRequest::new(vec![1.0, 2.0], vec![4.0, 4.0], "t", PlotMode::Line).unwrap();
        assert_eq!(req.bounds(0.0).y, [2.0, 6.0]);

        let zeros = PlotRequest::new(vec![1.0], vec![0.0], "t", PlotMode::Line).unwrap();
        assert_eq!(zeros.bounds(0.0).y, [-1.0, 1.0]);
    }

    #[test]
    fn bounds_skip_non_finite_values() {
        let req = PlotRequest::new(
            vec![1.0, 2.0, 3.0],
            vec![f64::NAN, 5.0, f64::INFINITY],
            "t",
            PlotMode::Line,
        )
        .unwrap();
        assert_eq!(req.bounds(0.0).y, [2.5, 7.5]);
    }

    #[test]
    fn color_cycle_returns_to_start() {
        let mut color = PlotColor::default();
        for _ in 0..5 {
            color = color.next();
        }
        assert_eq!(color, PlotColor::Magenta);
    }
}
