use crate::error::RenderError;
use crate::pagination::PageBand;
use lopdf::ObjectId;
use std::io::Write;
use zoo_layout::Canvas;

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// Call order: `begin_document`, then per page `render_page_content` and
/// `write_page_object`, then `finish` with every page id in order.
pub trait DocumentRenderer<W: Write> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError>;

    /// Draws the part of `canvas` that falls inside `band`, shifted so the
    /// band's top edge sits at the top of the page.
    fn render_page_content(
        &mut self,
        canvas: &Canvas,
        band: &PageBand,
        page_width: f32,
    ) -> Result<ObjectId, RenderError>;

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_width: f32,
        page_height: f32,
    ) -> Result<ObjectId, RenderError>;

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError>;
}
