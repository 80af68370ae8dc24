//! PDF renderer using lopdf.
//!
//! Writes each page band of a rasterized report canvas as one PDF page, with
//! the standard Helvetica fonts and WinAnsi text encoding.

mod helpers;
mod renderer;

pub use helpers::render_band_to_content;
pub use renderer::LopdfRenderer;
