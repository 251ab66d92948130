//! File collaborators: image save/load and CSV export/import.

pub mod csv;
pub mod image;

pub use self::csv::{read_csv, read_plot, to_csv_string, write_csv};
pub use self::image::{load_image, save_plot, save_raster, LoadedImage, IMAGE_EXTENSIONS};

/// Extensions accepted when opening plot data.
pub const DATA_EXTENSIONS: [&str; 1] = ["csv"];
