//! Intermediate Document Format (IDF)
//!
//! The in-memory representation of a report after templating and before
//! rasterization: a title, a handful of text blocks and a single table.
//! Nothing here knows about pages, fonts or PDF.

use serde::Serialize;

/// Horizontal alignment of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// Represents a block-level element in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum IRNode {
    /// A heading, with a level (1 = most prominent) and plain text.
    Heading {
        level: u8,
        align: TextAlign,
        text: String,
    },
    /// A paragraph of plain text.
    Paragraph { align: TextAlign, text: String },
    /// A table.
    Table(TableNode),
}

impl IRNode {
    /// Returns a string identifier for the node type.
    pub fn kind(&self) -> &'static str {
        match self {
            IRNode::Heading { .. } => "heading",
            IRNode::Paragraph { .. } => "paragraph",
            IRNode::Table(_) => "table",
        }
    }
}

// --- Table-specific Structures ---

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TableNode {
    pub header: TableRow,
    pub body: TableBody,
}

impl TableNode {
    pub fn new(labels: &[&str]) -> Self {
        Self {
            header: TableRow::from_texts(labels.iter().map(|l| l.to_string())),
            body: TableBody::default(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.header.cells.len()
    }

    pub fn push_row(&mut self, cells: impl IntoIterator<Item = String>) {
        self.body.rows.push(TableRow::from_texts(cells));
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TableBody {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn from_texts(texts: impl IntoIterator<Item = String>) -> Self {
        Self {
            cells: texts.into_iter().map(|text| TableCell { text }).collect(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TableCell {
    pub text: String,
}

/// A complete report document.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Document {
    pub title: String,
    pub children: Vec<IRNode>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, node: IRNode) {
        self.children.push(node);
    }

    /// The first table in the document, if any.
    pub fn table(&self) -> Option<&TableNode> {
        self.children.iter().find_map(|node| match node {
            IRNode::Table(table) => Some(table),
            _ => None,
        })
    }

    /// Header labels of the first table, in column order.
    pub fn header_labels(&self) -> Vec<&str> {
        self.table().map(|t| t.header.texts()).unwrap_or_default()
    }

    /// Body cell texts of the first table, row by row.
    pub fn body_rows(&self) -> Vec<Vec<&str>> {
        self.table()
            .map(|t| t.body.rows.iter().map(TableRow::texts).collect())
            .unwrap_or_default()
    }

    /// Every piece of text in reading order.
    pub fn text_blocks(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|node| match node {
                IRNode::Heading { text, .. } | IRNode::Paragraph { text, .. } => {
                    Some(text.as_str())
                }
                IRNode::Table(_) => None,
            })
            .collect()
    }
}
