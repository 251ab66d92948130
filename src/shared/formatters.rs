//! Shared formatting utilities for UI components.

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val < 1e-9 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Evenly spaced axis labels over `[min, max]`.
pub fn axis_labels(bounds: [f64; 2], count: usize) -> Vec<String> {
    let count = count.max(2);
    let step = (bounds[1] - bounds[0]) / (count - 1) as f64;
    (0..count)
        .map(|i| format_axis_label(bounds[0] + step * i as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_pick_precision_by_magnitude() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(3.14159), "3.1");
        assert_eq!(format_axis_label(0.25), "0.25");
        assert_eq!(format_axis_label(250.4), "250");
        assert_eq!(format_axis_label(22026.47), "22026");
        assert_eq!(format_axis_label(123456.0), "1.2e5");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }

    #[test]
    fn axis_labels_span_bounds() {
        let labels = axis_labels([0.0, 10.0], 3);
        assert_eq!(labels, vec!["0", "5.0", "10.0"]);
        assert_eq!(axis_labels([0.0, 1.0], 0).len(), 2);
    }
}
