use crate::canvas::{Canvas, LayoutElement, PositionedElement, TextElement};
use crate::error::RasterError;
use crate::metrics::{text_width, wrap_text};
use crate::style::LayoutStyle;
use zoo_idf::{Document, IRNode, TableNode, TableRow, TextAlign};
use zoo_types::{Color, Rect};

/// Width of an A4 page at 96 CSS pixels per inch.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 794.0;

/// The capture capability the exporter relies on: turn a document into a
/// canvas as wide as the output page.
pub trait Rasterizer {
    fn rasterize(&self, document: &Document, target_width: f32) -> Result<Canvas, RasterError>;
}

/// Block layout of report documents at a fixed viewport width.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    style: LayoutStyle,
    viewport_width: f32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutStyle::default(), DEFAULT_VIEWPORT_WIDTH)
    }
}

/// Running state while stacking blocks down the canvas.
struct Cursor {
    y: f32,
    /// Bottom margin of the previous block, collapsed with the next top margin.
    pending_margin: f32,
    elements: Vec<PositionedElement>,
}

impl Cursor {
    fn advance_margin(&mut self, top_margin: f32) {
        self.y += self.pending_margin.max(top_margin);
        self.pending_margin = 0.0;
    }

    fn push(&mut self, rect: Rect, element: LayoutElement) {
        self.elements.push(PositionedElement { rect, element });
    }
}

impl LayoutEngine {
    pub fn new(style: LayoutStyle, viewport_width: f32) -> Self {
        Self {
            style,
            viewport_width,
        }
    }

    pub fn style(&self) -> &LayoutStyle {
        &self.style
    }

    /// Lays the document out in viewport pixels, without scaling.
    pub fn layout(&self, document: &Document) -> Result<Canvas, RasterError> {
        let padding = self.style.padding;
        let content_width = self.viewport_width - 2.0 * padding;
        if !(content_width > 0.0) {
            return Err(RasterError::InvalidViewport {
                viewport: self.viewport_width,
                padding,
            });
        }

        let mut cursor = Cursor {
            y: padding,
            pending_margin: 0.0,
            elements: Vec::new(),
        };

        for node in &document.children {
            match node {
                IRNode::Heading { level, align, text } => {
                    let size = self.style.heading_font_size(*level);
                    let margin = self.style.heading_margin(*level);
                    cursor.advance_margin(margin);
                    self.text_block(&mut cursor, text, *align, size, true, padding, content_width);
                    cursor.pending_margin = margin;
                }
                IRNode::Paragraph { align, text } => {
                    let size = self.style.font_size;
                    cursor.advance_margin(size);
                    self.text_block(&mut cursor, text, *align, size, false, padding, content_width);
                    cursor.pending_margin = size;
                }
                IRNode::Table(table) => {
                    self.table(&mut cursor, table, padding, content_width)?;
                }
            }
        }

        let height = cursor.y + cursor.pending_margin + padding;
        log::debug!(
            "Laid out '{}': {} elements, {:.1}px tall",
            document.title,
            cursor.elements.len(),
            height
        );
        Ok(Canvas {
            width: self.viewport_width,
            height,
            elements: cursor.elements,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn text_block(
        &self,
        cursor: &mut Cursor,
        text: &str,
        align: TextAlign,
        font_size: f32,
        bold: bool,
        x: f32,
        width: f32,
    ) {
        let line_box = self.style.line_box(font_size);
        for line in wrap_text(text, width, font_size, bold) {
            let line_width = text_width(&line, font_size, bold);
            let line_x = match align {
                TextAlign::Left => x,
                TextAlign::Center => x + (width - line_width).max(0.0) / 2.0,
            };
            cursor.push(
                Rect::new(line_x, cursor.y, line_width, line_box),
                self.text(line, font_size, bold),
            );
            cursor.y += line_box;
        }
    }

    fn table(
        &self,
        cursor: &mut Cursor,
        table: &TableNode,
        x: f32,
        width: f32,
    ) -> Result<(), RasterError> {
        let columns = table.column_count();
        if columns == 0 {
            return Err(RasterError::EmptyTable);
        }
        if let Some((row, found)) = table
            .body
            .rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.cells.len()))
            .find(|(_, found)| *found != columns)
        {
            return Err(RasterError::RaggedRow {
                row,
                expected: columns,
                found,
            });
        }

        cursor.advance_margin(self.style.table_margin_top);
        let column_width = width / columns as f32;
        self.table_row(
            cursor,
            &table.header,
            x,
            column_width,
            true,
            Some(self.style.header_background),
        );
        for row in &table.body.rows {
            self.table_row(cursor, row, x, column_width, false, None);
        }
        Ok(())
    }

    fn table_row(
        &self,
        cursor: &mut Cursor,
        row: &TableRow,
        x: f32,
        column_width: f32,
        bold: bool,
        background: Option<Color>,
    ) {
        let pad = self.style.cell_padding;
        let font_size = self.style.font_size;
        let line_box = self.style.line_box(font_size);
        let inner_width = column_width - 2.0 * pad;

        let wrapped: Vec<Vec<String>> = row
            .cells
            .iter()
            .map(|cell| wrap_text(&cell.text, inner_width, font_size, bold))
            .collect();
        let max_lines = wrapped.iter().map(Vec::len).max().unwrap_or(1);
        let row_height = max_lines as f32 * line_box + 2.0 * pad;
        let top = cursor.y;

        if let Some(color) = background {
            cursor.push(
                Rect::new(x, top, column_width * row.cells.len() as f32, row_height),
                LayoutElement::Fill(color),
            );
        }
        for i in 0..wrapped.len() {
            cursor.push(
                Rect::new(x + i as f32 * column_width, top, column_width, row_height),
                LayoutElement::Border {
                    width: self.style.border_width,
                    color: self.style.border_color,
                },
            );
        }
        for (i, lines) in wrapped.into_iter().enumerate() {
            let cell_x = x + i as f32 * column_width + pad;
            for (n, line) in lines.into_iter().enumerate() {
                let line_width = text_width(&line, font_size, bold);
                cursor.push(
                    Rect::new(cell_x, top + pad + n as f32 * line_box, line_width, line_box),
                    self.text(line, font_size, bold),
                );
            }
        }
        cursor.y = top + row_height;
    }

    fn text(&self, content: String, font_size: f32, bold: bool) -> LayoutElement {
        LayoutElement::Text(TextElement {
            content,
            font_size,
            bold,
            color: self.style.text_color,
        })
    }
}

impl Rasterizer for LayoutEngine {
    /// Lays out at the viewport width, then scales everything so the canvas
    /// is exactly `target_width` wide.
    fn rasterize(&self, document: &Document, target_width: f32) -> Result<Canvas, RasterError> {
        if !(target_width > 0.0) {
            return Err(RasterError::InvalidTargetWidth(target_width));
        }
        Ok(self.layout(document)?.scale_to_width(target_width))
    }
}
