//! Content-stream drawing for one page band.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use std::collections::HashMap;
use zoo_layout::{Canvas, LayoutElement, PositionedElement, TextElement};
use zoo_render_core::utils::{BASE_FONT, styled_font_name, to_win_ansi};
use zoo_render_core::{PageBand, RenderError};
use zoo_types::{Color, Rect};

/// Ascent of Helvetica as a fraction of the font size.
const ASCENT: f32 = 0.8;

/// Draws every element of `canvas` that touches `band`.
///
/// Elements crossing the band edges are emitted whole and left to the page
/// boundary to crop.
pub fn render_band_to_content(
    canvas: &Canvas,
    band: &PageBand,
    font_map: &HashMap<String, String>,
) -> Result<Content, RenderError> {
    let mut page_ctx = PageContext::new(band, font_map);
    for el in band.visible(canvas) {
        page_ctx.draw_element(el)?;
    }
    Ok(page_ctx.finish())
}

struct PageContext<'a> {
    band: &'a PageBand,
    content: Content,
    state: PageRenderState,
    font_map: &'a HashMap<String, String>,
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_name: String,
    font_size: f32,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

impl<'a> PageContext<'a> {
    fn new(band: &'a PageBand, font_map: &'a HashMap<String, String>) -> Self {
        Self {
            band,
            content: Content { operations: vec![] },
            state: Default::default(),
            font_map,
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_element(&mut self, el: &PositionedElement) -> Result<(), RenderError> {
        match &el.element {
            LayoutElement::Fill(color) => self.draw_fill(&el.rect, *color),
            LayoutElement::Border { width, color } => self.draw_border(&el.rect, *width, *color),
            LayoutElement::Text(text) => self.draw_text(&el.rect, text)?,
        }
        Ok(())
    }

    /// Rectangle operands in page space: lower-left corner, width, height.
    fn rect_operands(&self, rect: &Rect) -> Vec<Object> {
        let y = self.band.to_page_y(rect.bottom());
        vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()]
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.op("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, width: f32, color: Color) {
        if self.state.line_width != Some(width) {
            self.op("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            self.op("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
    }

    fn draw_fill(&mut self, rect: &Rect, color: Color) {
        self.set_fill_color(color);
        let operands = self.rect_operands(rect);
        self.op("re", operands);
        self.op("f", vec![]);
    }

    fn draw_border(&mut self, rect: &Rect, width: f32, color: Color) {
        self.set_stroke(width, color);
        let operands = self.rect_operands(rect);
        self.op("re", operands);
        self.op("S", vec![]);
    }

    fn set_font(&mut self, text: &TextElement) -> Result<(), RenderError> {
        let styled = styled_font_name(BASE_FONT, text.bold);
        let internal_font_name = self
            .font_map
            .get(&styled)
            .or_else(|| self.font_map.get(BASE_FONT))
            .ok_or_else(|| RenderError::Other(format!("No font resource for '{}'", styled)))?
            .clone();

        if self.state.font_name != internal_font_name || self.state.font_size != text.font_size {
            self.op(
                "Tf",
                vec![
                    Object::Name(internal_font_name.as_bytes().to_vec()),
                    text.font_size.into(),
                ],
            );
            self.state.font_name = internal_font_name;
            self.state.font_size = text.font_size;
        }
        Ok(())
    }

    fn draw_text(&mut self, rect: &Rect, text: &TextElement) -> Result<(), RenderError> {
        if text.content.trim().is_empty() {
            return Ok(());
        }
        let baseline = rect.y + (rect.height - text.font_size) / 2.0 + text.font_size * ASCENT;
        let pdf_y = self.band.to_page_y(baseline);

        self.op("BT", vec![]);
        self.set_font(text)?;
        self.set_fill_color(text.color);
        self.op("Td", vec![rect.x.into(), pdf_y.into()]);
        self.op(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
        Ok(())
    }
}
