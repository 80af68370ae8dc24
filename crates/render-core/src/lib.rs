//! Core rendering abstractions for PDF export.
//!
//! This crate provides the fundamental traits and types used by PDF rendering backends:
//! - `DocumentRenderer` trait for abstracting PDF writing operations
//! - `paginate` for slicing a rasterized canvas into page bands
//! - Error types for rendering operations
//! - Shared helpers for fonts and text encoding

mod compose;
mod error;
pub mod pagination;
mod traits;
pub mod utils;

pub use compose::render_paginated;
pub use error::RenderError;
pub use pagination::{PageBand, paginate};
pub use traits::DocumentRenderer;
