//! Clipboard integration.

use crate::error::Result;
use crate::export::to_csv_string;
use crate::plot::PlotRequest;
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy a plot's data to the clipboard as CSV text.
pub fn copy_plot(request: &PlotRequest) -> Result<()> {
    let text = to_csv_string(request.x(), request.y())?;
    copy_to_clipboard(&text)
}
