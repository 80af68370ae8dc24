use serde::{Deserialize, Serialize};
use zoo_types::Color;

/// Box metrics of the report page, in CSS pixels of the layout viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutStyle {
    pub padding: f32,
    pub heading_font_size: f32,
    pub font_size: f32,
    /// Line box height as a multiple of the font size.
    pub line_height: f32,
    pub table_margin_top: f32,
    pub cell_padding: f32,
    pub border_width: f32,
    pub border_color: Color,
    pub header_background: Color,
    pub text_color: Color,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            padding: 20.0,
            heading_font_size: 32.0,
            font_size: 16.0,
            line_height: 1.2,
            table_margin_top: 20.0,
            cell_padding: 8.0,
            border_width: 1.0,
            border_color: Color::gray(0xdd),
            header_background: Color::gray(0xf0),
            text_color: Color::BLACK,
        }
    }
}

impl LayoutStyle {
    /// Vertical margin around a heading of the given level (`0.67em` for `h1`).
    pub fn heading_margin(&self, level: u8) -> f32 {
        let factor = match level {
            1 => 0.67,
            2 => 0.83,
            _ => 1.0,
        };
        self.heading_font_size(level) * factor
    }

    pub fn heading_font_size(&self, level: u8) -> f32 {
        match level {
            0 | 1 => self.heading_font_size,
            2 => self.heading_font_size * 0.75,
            _ => self.font_size * 1.17,
        }
    }

    pub fn line_box(&self, font_size: f32) -> f32 {
        font_size * self.line_height
    }
}
