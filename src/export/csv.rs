//! Two-column CSV export and import.
//!
//! Files start with an `X,Y` header followed by one row per point. Values use
//! Rust's shortest round-trip float formatting, so reading a file back yields
//! the exact values that were written.

use crate::error::{GraphError, Result};
use crate::plot::{PlotMode, PlotRequest};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Header row written before the data.
pub const HEADER: [&str; 2] = ["X", "Y"];

/// Write `x`/`y` pairs to a CSV file.
pub fn write_csv(path: &Path, x: &[f64], y: &[f64]) -> Result<()> {
    let file = File::create(path).map_err(|e| GraphError::file_open(path.to_path_buf(), e))?;
    let mut writer = csv::Writer::from_writer(file);
    write_rows(x, y, &mut writer)
}

/// Render `x`/`y` pairs as CSV text.
pub fn to_csv_string(x: &[f64], y: &[f64]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_rows(x, y, &mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| GraphError::Io(e.into_error()))?;
    // Every field is ASCII produced by float formatting.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_rows<W: Write>(x: &[f64], y: &[f64], writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record(HEADER)?;
    for (x, y) in x.iter().zip(y) {
        writer.write_record([x.to_string(), y.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Read `x`/`y` columns from a CSV file written by [`write_csv`].
pub fn read_csv(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let file = File::open(path).map_err(|e| GraphError::file_open(path.to_path_buf(), e))?;
    read_rows(file)
}

fn read_rows<R: Read>(source: R) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut x = Vec::new();
    let mut y = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.len() != 2 {
            return Err(GraphError::invalid_csv(
                line,
                format!("expected 2 columns, found {}", record.len()),
            ));
        }
        x.push(parse_field(&record[0], line)?);
        y.push(parse_field(&record[1], line)?);
    }

    Ok((x, y))
}

fn parse_field(field: &str, line: u64) -> Result<f64> {
    field
        .parse::<f64>()
        .map_err(|_| GraphError::invalid_csv(line, format!("{:?} is not a number", field)))
}

/// Load a CSV file as a line plot titled after the file name.
pub fn read_plot(path: &Path) -> Result<PlotRequest> {
    let (x, y) = read_csv(path)?;
    let title = path
        .file_stem()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "data".to_string());
    PlotRequest::new(x, y, title, PlotMode::Line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{generate, CurveKind};
    use tempfile::tempdir;

    #[test]
    fn writes_header_then_rows() {
        let text = to_csv_string(&[1.0, 2.5], &[-3.0, 0.125]).unwrap();
        assert_eq!(text, "X,Y\n1,-3\n2.5,0.125\n");
    }

    #[test]
    fn round_trips_exact_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sine.csv");

        for kind in [CurveKind::Sine, CurveKind::Exponential, CurveKind::RandomNoise] {
            let req = generate(kind);
            write_csv(&path, req.x(), req.y()).unwrap();
            let (x, y) = read_csv(&path).unwrap();
            assert_eq!(x, req.x());
            assert_eq!(y, req.y());
        }
    }

    #[test]
    fn read_plot_uses_file_stem_as_title() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("measurements.csv");
        write_csv(&path, &[1.0, 2.0], &[3.0, 4.0]).unwrap();

        let req = read_plot(&path).unwrap();
        assert_eq!(req.title(), "measurements");
        assert_eq!(req.points(), vec![(1.0, 3.0), (2.0, 4.0)]);
    }

    #[test]
    fn rejects_non_numeric_rows() {
        let err = read_rows("X,Y\n1,2\n3,four\n".as_bytes()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidCsv { line: 3, .. }), "{err}");
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = read_rows("X,Y,Z\n1,2,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidCsv { line: 2, .. }), "{err}");
    }

    #[test]
    fn rejects_ragged_row() {
        let err = read_rows("X,Y\n1,2\n3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidCsv { line: 3, .. }), "{err}");
    }

    #[test]
    fn header_only_file_is_not_a_plot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "X,Y\n").unwrap();
        assert!(matches!(
            read_plot(&path),
            Err(GraphError::InvalidSeries { x_len: 0, y_len: 0 })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_csv(Path::new("/nonexistent/graphdeck.csv")).unwrap_err();
        assert!(matches!(err, GraphError::FileOpen { .. }));
    }
}
