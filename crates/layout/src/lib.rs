//! Rasterization of report documents.
//!
//! A [`Document`](zoo_idf::Document) is laid out once, top to bottom, on a
//! single [`Canvas`] whose width matches the output page. Pagination happens
//! later by slicing that canvas; nothing here knows about pages.

mod canvas;
mod engine;
mod error;
pub mod metrics;
mod style;

pub use canvas::{Canvas, LayoutElement, PositionedElement, TextElement};
pub use engine::{DEFAULT_VIEWPORT_WIDTH, LayoutEngine, Rasterizer};
pub use error::RasterError;
pub use style::LayoutStyle;
