//! Raster image output and input.
//!
//! Plots are rendered with plotters' bitmap backend, which picks PNG or JPEG
//! from the file extension. The image carries the series, a light grid and a
//! frame; titles and tick labels are only shown in the terminal view. Previously saved graphs are decoded with the
//! `image` crate so the viewer can show them again.

use crate::config::ExportLayoutConfig;
use crate::error::{GraphError, Result};
use crate::plot::{PlotMode, PlotRequest};
use image::RgbImage;
use plotters::prelude::{
    BitMapBackend, ChartBuilder, Circle, Color, IntoDrawingArea, LineSeries, PathElement,
    RGBColor, Rectangle, BLACK, WHITE,
};
use std::path::{Path, PathBuf};

/// Extensions accepted for saving and loading graphs.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// A decoded raster image shown in the viewer.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Where the image came from.
    pub path: PathBuf,
    /// Decoded pixels.
    pub pixels: RgbImage,
}

impl LoadedImage {
    /// Display name (basename of path).
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string())
    }
}

/// Check that `path` ends in one of [`IMAGE_EXTENSIONS`].
pub fn check_image_path(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(GraphError::unsupported_format(extension))
    }
}

/// Render `request` to a PNG or JPEG file.
pub fn save_plot(request: &PlotRequest, path: &Path, layout: &ExportLayoutConfig) -> Result<()> {
    check_image_path(path)?;

    let root = BitMapBackend::new(path, (layout.width, layout.height)).into_drawing_area();
    root.fill(&WHITE).map_err(GraphError::render)?;

    let bounds = request.bounds(0.05);
    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .build_cartesian_2d(bounds.x[0]..bounds.x[1], bounds.y[0]..bounds.y[1])
        .map_err(GraphError::render)?;

    // No font backend is compiled in, so the grid and frame are drawn as plain paths
    let divisions = layout.grid_lines.max(1);
    let step = |range: [f64; 2], i: usize| {
        range[0] + (range[1] - range[0]) * i as f64 / divisions as f64
    };
    let grid = RGBColor(225, 225, 225);
    chart
        .draw_series((0..=divisions).map(|i| {
            let x = step(bounds.x, i);
            PathElement::new(vec![(x, bounds.y[0]), (x, bounds.y[1])], grid)
        }))
        .map_err(GraphError::render)?;
    chart
        .draw_series((0..=divisions).map(|i| {
            let y = step(bounds.y, i);
            PathElement::new(vec![(bounds.x[0], y), (bounds.x[1], y)], grid)
        }))
        .map_err(GraphError::render)?;
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(bounds.x[0], bounds.y[0]), (bounds.x[1], bounds.y[1])],
            BLACK.stroke_width(1),
        )))
        .map_err(GraphError::render)?;

    let (r, g, b) = request.color().rgb();
    let color = RGBColor(r, g, b);
    let points = request
        .points()
        .into_iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite());

    match request.mode() {
        PlotMode::Line => {
            chart
                .draw_series(LineSeries::new(points, color.stroke_width(2)))
                .map_err(GraphError::render)?;
        },
        PlotMode::Scatter => {
            let radius = layout.marker_radius;
            chart
                .draw_series(points.map(|p| Circle::new(p, radius, color.filled())))
                .map_err(GraphError::render)?;
        },
    }

    root.present().map_err(GraphError::render)?;
    tracing::info!("Saved plot '{}' to {}", request.title(), path.display());
    Ok(())
}

/// Re-encode a loaded image to `path`.
pub fn save_raster(image: &LoadedImage, path: &Path) -> Result<()> {
    check_image_path(path)?;
    image.pixels.save(path)?;
    tracing::info!("Saved image {} to {}", image.name(), path.display());
    Ok(())
}

/// Decode a PNG or JPEG file.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    check_image_path(path)?;
    if !path.exists() {
        return Err(GraphError::file_open(
            path.to_path_buf(),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        ));
    }

    let pixels = image::open(path)?.to_rgb8();
    tracing::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        pixels.width(),
        pixels.height()
    );

    Ok(LoadedImage {
        path: path.to_path_buf(),
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{generate, CurveKind};
    use crate::custom::parse_custom;
    use tempfile::tempdir;

    const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    #[test]
    fn saves_line_plot_as_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sine.png");
        let layout = ExportLayoutConfig::default();

        save_plot(&generate(CurveKind::Sine), &path, &layout).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.pixels.width(), layout.width);
        assert_eq!(loaded.pixels.height(), layout.height);
        assert_eq!(loaded.name(), "sine.png");
    }

    #[test]
    fn saves_scatter_plot_as_jpeg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dots.jpg");

        save_plot(
            &generate(CurveKind::ScatterRandom),
            &path,
            &ExportLayoutConfig::default(),
        )
        .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn saves_single_point_plot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("one.png");
        let req = parse_custom("2", "3").unwrap();
        save_plot(&req, &path, &ExportLayoutConfig::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.bmp");
        let err = save_plot(
            &generate(CurveKind::Linear),
            &path,
            &ExportLayoutConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::UnsupportedFormat { ref extension } if extension == "bmp"));
        assert!(!path.exists());
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(check_image_path(Path::new("a.PNG")).is_ok());
        assert!(check_image_path(Path::new("a.Jpeg")).is_ok());
        assert!(check_image_path(Path::new("noext")).is_err());
    }

    #[test]
    fn raster_round_trip() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.png");
        let mut pixels = RgbImage::new(4, 2);
        pixels.put_pixel(1, 1, image::Rgb([255, 0, 255]));
        pixels.save(&src).unwrap();

        let loaded = load_image(&src).unwrap();
        let copy = dir.path().join("copy.png");
        save_raster(&loaded, &copy).unwrap();

        let reloaded = load_image(&copy).unwrap();
        assert_eq!(reloaded.pixels, pixels);
    }

    #[test]
    fn missing_image_is_file_open_error() {
        let err = load_image(Path::new("/nonexistent/graph.png")).unwrap_err();
        assert!(matches!(err, GraphError::FileOpen { .. }));
    }
}
