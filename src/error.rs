// src/error.rs
use crate::store::StoreError;
use thiserror::Error;
use zoo_layout::RasterError;
use zoo_render_core::RenderError;
use zoo_template::UnknownReportKind;

/// Failure of a single export call. No file is delivered when this is returned.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Content holder '{0}' was not found")]
    ContentNotFound(String),

    #[error("Content holder '{0}' is already mounted by another export")]
    HolderInUse(String),

    #[error("Invalid output file name: '{0}'")]
    InvalidFileName(String),

    /// The rasterizer's own error, passed through unchanged.
    #[error(transparent)]
    Rasterization(#[from] RasterError),

    #[error("PDF rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to deliver file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// A comprehensive error type for the report pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Data store error: {0}")]
    Store(#[from] StoreError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error(transparent)]
    UnknownKind(#[from] UnknownReportKind),

    #[error("{0}")]
    Usage(String),
}
