//! Validation of user-typed custom plot data.
//!
//! Both axes arrive as raw comma-separated text straight from the input
//! dialog. A token that is not a number rejects the whole input; there is no
//! partial result.

use crate::plot::{PlotMode, PlotRequest};
use std::fmt;
use thiserror::Error;

/// Title given to every custom plot.
pub const CUSTOM_TITLE: &str = "Your graph";

/// Result of validating custom plot text.
pub type ParseOutcome = std::result::Result<PlotRequest, ParseError>;

/// Which input field a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
        }
    }
}

/// Why custom data was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token could not be parsed as a number.
    #[error("Please enter numeric data separated by commas ({axis} axis: {token:?} is not a number)")]
    NonNumericInput {
        /// Axis whose text held the token.
        axis: Axis,
        /// The offending token, untrimmed.
        token: String,
    },

    /// The axes hold different numbers of values.
    #[error("The lengths of the data lists for X and Y must be the same (X has {x_len}, Y has {y_len})")]
    LengthMismatch {
        /// Number of X values.
        x_len: usize,
        /// Number of Y values.
        y_len: usize,
    },
}

/// Parse one axis of comma-separated numbers.
///
/// Surrounding whitespace on each token is ignored. An empty string is a
/// single empty token and therefore fails.
pub fn parse_series(text: &str, axis: Axis) -> Result<Vec<f64>, ParseError> {
    text.split(',')
        .map(|token| {
            token
                .trim()
                .parse::<f64>()
                .map_err(|_| ParseError::NonNumericInput {
                    axis,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Validate both axes and build a line plot titled [`CUSTOM_TITLE`].
pub fn parse_custom(x_text: &str, y_text: &str) -> ParseOutcome {
    let x = parse_series(x_text, Axis::X)?;
    let y = parse_series(y_text, Axis::Y)?;

    if x.len() != y.len() {
        return Err(ParseError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    Ok(PlotRequest::from_series(x, y, CUSTOM_TITLE, PlotMode::Line))
}
