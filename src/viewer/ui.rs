//! Viewer rendering: welcome banner, line/scatter chart, raster image.

use super::View;
use crate::config::ChartLayoutConfig;
use crate::plot::{PlotMode, PlotRequest};
use crate::shared::{axis_labels, ThemeColors};
use image::imageops::{self, FilterType};
use image::RgbImage;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget},
    Frame,
};

/// Draw the current view into `area`.
pub fn draw_view(
    f: &mut Frame<'_>,
    area: Rect,
    view: &View,
    layout: &ChartLayoutConfig,
    colors: &ThemeColors,
) {
    match view {
        View::Welcome => draw_welcome(f, area, colors),
        View::Plot(request) => draw_plot(f, area, request, layout, colors),
        View::Image(image) => {
            let block = Block::default()
                .title(format!(" {} ", image.name()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg));
            let inner = block.inner(area);
            f.render_widget(block, area);
            f.render_widget(
                ImageView {
                    image: &image.pixels,
                    background: colors.bg,
                },
                inner,
            );
        },
    }
}

fn draw_welcome(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let lines = vec![
        Line::from(Span::styled(
            "WELCOME!",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press F10 or m to open the menu, 1-8 for a ready graph, i for your own data",
            Style::default().fg(colors.text),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, chunks[1]);
}

fn draw_plot(
    f: &mut Frame<'_>,
    area: Rect,
    request: &PlotRequest,
    layout: &ChartLayoutConfig,
    colors: &ThemeColors,
) {
    let bounds = request.bounds(layout.axis_padding_factor);
    let points: Vec<(f64, f64)> = request
        .points()
        .into_iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    let (marker, graph_type) = match request.mode() {
        PlotMode::Line => (Marker::Braille, GraphType::Line),
        PlotMode::Scatter => (Marker::Dot, GraphType::Scatter),
    };

    let datasets = vec![Dataset::default()
        .name(request.title())
        .marker(marker)
        .graph_type(graph_type)
        .style(Style::default().fg(request.color().to_color()))
        .data(&points)];

    let x_axis = Axis::default()
        .title("X")
        .style(Style::default().fg(colors.text))
        .bounds(bounds.x)
        .labels(axis_labels(bounds.x, layout.axis_label_count));

    let y_axis = Axis::default()
        .title("Y")
        .style(Style::default().fg(colors.text))
        .bounds(bounds.y)
        .labels(axis_labels(bounds.y, layout.axis_label_count));

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(format!(" {} ", request.title()))
                .title_alignment(Alignment::Center)
                .title_style(
                    Style::default()
                        .fg(colors.heading)
                        .add_modifier(Modifier::BOLD),
                )
                .style(Style::default().bg(colors.bg)),
        )
        .legend_position(None)
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

/// Largest size with the image's aspect ratio that fits `max_w` x `max_h`.
pub fn fit_size(width: u32, height: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if width == 0 || height == 0 || max_w == 0 || max_h == 0 {
        return (0, 0);
    }
    let scale = f64::min(max_w as f64 / width as f64, max_h as f64 / height as f64);
    let w = ((width as f64 * scale).round() as u32).clamp(1, max_w);
    let h = ((height as f64 * scale).round() as u32).clamp(1, max_h);
    (w, h)
}

/// Raster image drawn with upper-half blocks, two pixels per cell.
struct ImageView<'a> {
    image: &'a RgbImage,
    background: Color,
}

impl Widget for ImageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (w, h) = fit_size(
            self.image.width(),
            self.image.height(),
            area.width as u32,
            area.height as u32 * 2,
        );
        if w == 0 || h == 0 {
            return;
        }

        let scaled = imageops::resize(self.image, w, h, FilterType::Triangle);
        let x0 = area.x + ((area.width as u32 - w) / 2) as u16;
        let y0 = area.y + ((area.height as u32 * 2 - h) / 4) as u16;

        for cy in 0..h.div_ceil(2) {
            for cx in 0..w {
                let top = scaled.get_pixel(cx, cy * 2);
                let bottom = if cy * 2 + 1 < h {
                    let p = scaled.get_pixel(cx, cy * 2 + 1);
                    Color::Rgb(p[0], p[1], p[2])
                } else {
                    self.background
                };

                if let Some(cell) = buf.cell_mut((x0 + cx as u16, y0 + cy as u16)) {
                    cell.set_symbol("▀")
                        .set_fg(Color::Rgb(top[0], top[1], top[2]))
                        .set_bg(bottom);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_keeps_aspect_ratio() {
        assert_eq!(fit_size(640, 480, 80, 48), (64, 48));
        assert_eq!(fit_size(100, 10, 50, 50), (50, 5));
        assert_eq!(fit_size(1, 1, 10, 4), (4, 4));
        assert_eq!(fit_size(10, 10, 0, 4), (0, 0));
    }

    #[test]
    fn image_fills_cells_with_half_blocks() {
        let mut pixels = RgbImage::new(2, 2);
        pixels.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        pixels.put_pixel(0, 1, image::Rgb([0, 0, 255]));

        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        ImageView {
            image: &pixels,
            background: Color::Black,
        }
        .render(area, &mut buf);

        let cell = &buf[(0u16, 0u16)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(0, 0, 255));
    }
}
