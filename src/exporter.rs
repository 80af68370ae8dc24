//! The Document Exporter: rasterize a mounted document, slice it into
//! page-sized bands and deliver one PDF through a download sink.

use crate::error::ExportError;
use crate::holder::ContentHolders;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use zoo_layout::Rasterizer;
use zoo_render_core::{DocumentRenderer, render_paginated};
use zoo_render_lopdf::LopdfRenderer;
use zoo_types::PageSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportState {
    Idle,
    Rasterizing,
    Paginating,
    Saved,
    Failed,
}

impl ExportState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ExportState::Saved | ExportState::Failed)
    }
}

impl fmt::Display for ExportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportState::Idle => "IDLE",
            ExportState::Rasterizing => "RASTERIZING",
            ExportState::Paginating => "PAGINATING",
            ExportState::Saved => "SAVED",
            ExportState::Failed => "FAILED",
        };
        f.write_str(name)
    }
}

/// What a successful export delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub file_name: String,
    pub page_count: usize,
    pub byte_size: usize,
}

/// Destination of finished files, standing in for a browser download.
///
/// `save` must either deliver the whole file or nothing.
pub trait DownloadSink {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> io::Result<()>;
}

/// Writes files into a directory through a temporary file that is renamed
/// into place once complete.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

impl DownloadSink for DirectorySink {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(bytes)?;
        temp.as_file().sync_all()?;
        temp.persist(self.path_for(file_name))
            .map_err(|e| e.error)?;
        Ok(())
    }
}

/// Keeps delivered files in memory. A later file with the same name
/// replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file_name: &str) -> Option<&[u8]> {
        self.files.get(file_name).map(Vec::as_slice)
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl DownloadSink for MemorySink {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> io::Result<()> {
        self.files.insert(file_name.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Exports mounted documents one call at a time.
///
/// The state after each call is observable through [`state`](Self::state);
/// every call starts again from `Idle`.
pub struct Exporter<R: Rasterizer, S: DownloadSink> {
    holders: Arc<ContentHolders>,
    rasterizer: R,
    sink: S,
    page_size: PageSize,
    state: ExportState,
}

impl<R: Rasterizer, S: DownloadSink> Exporter<R, S> {
    pub fn new(holders: Arc<ContentHolders>, rasterizer: R, sink: S) -> Self {
        Self {
            holders,
            rasterizer,
            sink,
            page_size: PageSize::default(),
            state: ExportState::Idle,
        }
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn state(&self) -> ExportState {
        self.state
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn holders(&self) -> &Arc<ContentHolders> {
        &self.holders
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn export(
        &mut self,
        content_id: &str,
        file_name: &str,
    ) -> Result<ExportReceipt, ExportError> {
        self.transition(ExportState::Idle);
        match self.run(content_id, file_name) {
            Ok(receipt) => {
                self.transition(ExportState::Saved);
                log::info!(
                    "Exported '{}' as {} ({} pages, {} bytes)",
                    content_id,
                    receipt.file_name,
                    receipt.page_count,
                    receipt.byte_size
                );
                Ok(receipt)
            }
            Err(e) => {
                self.transition(ExportState::Failed);
                log::warn!("Export of '{}' failed: {}", content_id, e);
                Err(e)
            }
        }
    }

    fn run(&mut self, content_id: &str, file_name: &str) -> Result<ExportReceipt, ExportError> {
        let document = self
            .holders
            .get(content_id)
            .ok_or_else(|| ExportError::ContentNotFound(content_id.to_string()))?;
        validate_file_name(file_name)?;

        let (page_width, page_height) = self.page_size.dimensions_pt();

        self.transition(ExportState::Rasterizing);
        let canvas = self.rasterizer.rasterize(&document, page_width)?;

        self.transition(ExportState::Paginating);
        let renderer: Box<dyn DocumentRenderer<Vec<u8>>> = Box::new(LopdfRenderer::new());
        let (bytes, page_count) =
            render_paginated(renderer, &canvas, page_width, page_height, Vec::new())?;

        self.sink.save(file_name, &bytes)?;
        Ok(ExportReceipt {
            file_name: file_name.to_string(),
            page_count,
            byte_size: bytes.len(),
        })
    }

    fn transition(&mut self, next: ExportState) {
        if self.state != next {
            log::debug!("Exporter {} -> {}", self.state, next);
        }
        self.state = next;
    }
}

/// A download name is a bare file name, never a path.
fn validate_file_name(file_name: &str) -> Result<(), ExportError> {
    let bad = file_name.trim().is_empty()
        || file_name == "."
        || file_name == ".."
        || file_name.contains(['/', '\\', '\0']);
    if bad {
        return Err(ExportError::InvalidFileName(file_name.to_string()));
    }
    Ok(())
}
