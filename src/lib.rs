//! Graphdeck - a menu-driven terminal window for quick graphs.
//!
//! Graphdeck shows ready-made curves, plots numbers you type in, saves the
//! displayed graph as PNG or JPEG, exports its data to CSV, and opens saved
//! graphs again.
//!
//! # Features
//!
//! - Eight built-in curves (linear, sine, cosine, quadratic, exponential,
//!   logarithmic, random scatter, random noise)
//! - Custom plots from comma-separated X/Y values
//! - PNG/JPEG export via plotters, CSV export and import
//! - Image viewer for previously saved graphs
//! - Gruvbox and Orchid color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```
//! use graphdeck::curves::{generate, CurveKind};
//! use graphdeck::custom::{parse_custom, ParseError};
//!
//! let sine = generate(CurveKind::Sine);
//! assert_eq!(sine.x().len(), sine.y().len());
//!
//! let custom = parse_custom("1,2,3", "4,5,6").unwrap();
//! assert_eq!(custom.y(), &[4.0, 5.0, 6.0]);
//!
//! assert_eq!(
//!     parse_custom("1,2,3", "4,5"),
//!     Err(ParseError::LengthMismatch { x_len: 3, y_len: 2 })
//! );
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod curves;
pub mod custom;
pub mod dialog;
pub mod error;
pub mod export;
pub mod file_browser;
pub mod menu;
pub mod plot;
pub mod shared;
pub mod ui;
pub mod viewer;

pub use error::{GraphError, Result};
