use crate::error::RenderError;
use crate::pagination::paginate;
use crate::traits::DocumentRenderer;
use std::io::Write;
use zoo_layout::Canvas;

/// Drives a renderer over every page band of `canvas`.
///
/// Returns the writer with the finished document and the number of pages.
pub fn render_paginated<W: Write>(
    mut renderer: Box<dyn DocumentRenderer<W>>,
    canvas: &Canvas,
    page_width: f32,
    page_height: f32,
    writer: W,
) -> Result<(W, usize), RenderError> {
    let bands = paginate(canvas.height, page_height)?;
    renderer.begin_document(writer)?;

    let mut page_ids = Vec::with_capacity(bands.len());
    for band in &bands {
        let content_id = renderer.render_page_content(canvas, band, page_width)?;
        page_ids.push(renderer.write_page_object(vec![content_id], page_width, page_height)?);
    }

    let page_count = page_ids.len();
    let writer = renderer.finish(page_ids)?;
    Ok((writer, page_count))
}
