//! The rasterized form of a document: one continuous surface, as wide as a
//! page and as tall as the content, with absolutely positioned elements.

use zoo_types::{Color, Rect};

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font_size: f32,
    pub bold: bool,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    /// One line of text; the rect is its line box.
    Text(TextElement),
    /// A filled rectangle.
    Fill(Color),
    /// A stroked rectangle outline.
    Border { width: f32, color: Color },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    /// Top-left origin, y growing downwards.
    pub rect: Rect,
    pub element: LayoutElement,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<PositionedElement>,
}

impl Canvas {
    /// Rescales the whole canvas so that its width becomes `target_width`.
    pub fn scale_to_width(self, target_width: f32) -> Canvas {
        if self.width <= 0.0 {
            return self;
        }
        let factor = target_width / self.width;
        Canvas {
            width: target_width,
            height: self.height * factor,
            elements: self
                .elements
                .into_iter()
                .map(|el| PositionedElement {
                    rect: el.rect.scaled(factor),
                    element: match el.element {
                        LayoutElement::Text(mut text) => {
                            text.font_size *= factor;
                            LayoutElement::Text(text)
                        }
                        LayoutElement::Border { width, color } => LayoutElement::Border {
                            width: width * factor,
                            color,
                        },
                        other => other,
                    },
                })
                .collect(),
        }
    }

    /// Text lines in paint order.
    pub fn texts(&self) -> impl Iterator<Item = (&Rect, &TextElement)> {
        self.elements.iter().filter_map(|el| match &el.element {
            LayoutElement::Text(text) => Some((&el.rect, text)),
            _ => None,
        })
    }
}
