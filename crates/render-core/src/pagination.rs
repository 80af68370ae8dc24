//! Slicing a continuous canvas into fixed-height page bands.
//!
//! Bands are cut at fixed offsets with no regard for what lies underneath, so
//! a table row straddling an offset is drawn partly on each page.

use crate::error::RenderError;
use zoo_layout::{Canvas, PositionedElement};

/// The slice `[top, top + height)` of the canvas shown on page `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBand {
    pub index: usize,
    pub top: f32,
    pub height: f32,
}

impl PageBand {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Elements at least partly inside the band, in paint order.
    pub fn visible<'a>(&self, canvas: &'a Canvas) -> impl Iterator<Item = &'a PositionedElement> {
        let (top, bottom) = (self.top, self.bottom());
        canvas
            .elements
            .iter()
            .filter(move |el| el.rect.overlaps_band(top, bottom))
    }

    /// Converts a canvas y coordinate (top-down) into a PDF y coordinate on
    /// this band's page (bottom-up).
    pub fn to_page_y(&self, canvas_y: f32) -> f32 {
        self.height - (canvas_y - self.top)
    }
}

/// Upper bound on the pages of a single export.
pub const MAX_PAGES: usize = 100_000;

/// One band per page height until the canvas height is exhausted; never fewer
/// than one page.
pub fn paginate(total_height: f32, page_height: f32) -> Result<Vec<PageBand>, RenderError> {
    if !(page_height > 0.0) {
        return Err(RenderError::Geometry(format!(
            "page height must be positive, got {}",
            page_height
        )));
    }
    if !total_height.is_finite() || total_height < 0.0 {
        return Err(RenderError::Geometry(format!(
            "canvas height must be finite and non-negative, got {}",
            total_height
        )));
    }

    let bands = (total_height / page_height).ceil();
    if !(bands <= MAX_PAGES as f32) {
        return Err(RenderError::Geometry(format!(
            "{} / {} needs more than {} pages",
            total_height, page_height, MAX_PAGES
        )));
    }
    let count = (bands as usize).max(1);
    Ok((0..count)
        .map(|index| PageBand {
            index,
            top: index as f32 * page_height,
            height: page_height,
        })
        .collect())
}
