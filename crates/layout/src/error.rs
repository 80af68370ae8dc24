use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RasterError {
    #[error("Viewport width {viewport} leaves no room inside {padding}px padding")]
    InvalidViewport { viewport: f32, padding: f32 },

    #[error("Target width must be positive, got {0}")]
    InvalidTargetWidth(f32),

    #[error("Table has no columns")]
    EmptyTable,

    #[error("Table row {row} has {found} cells, header has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Rasterization failed: {0}")]
    Other(String),
}
