use crate::config::ReportConfig;
use crate::error::ExportError;
use crate::exporter::{DownloadSink, ExportReceipt, Exporter};
use crate::holder::ContentHolders;
use crate::snapshot::ReportSnapshot;
use chrono::NaiveDate;
use std::sync::Arc;
use zoo_idf::Document;
use zoo_layout::{LayoutEngine, Rasterizer};
use zoo_template::{ReportKind, TemplateRenderer};

/// Runs snapshot rows through the renderer and the exporter.
///
/// Each export mounts the rendered document under the kind's content
/// identifier for exactly the duration of the export call.
pub struct ReportService<S: DownloadSink, R: Rasterizer = LayoutEngine> {
    renderer: TemplateRenderer,
    holders: Arc<ContentHolders>,
    exporter: Exporter<R, S>,
    generation_date: Option<NaiveDate>,
}

impl<S: DownloadSink> ReportService<S, LayoutEngine> {
    pub fn from_config(config: &ReportConfig, sink: S) -> Self {
        let engine = LayoutEngine::new(config.layout.clone(), config.viewport_width);
        Self::new(TemplateRenderer::new(config.locale.clone()), engine, sink)
            .with_page_size(config.page_size)
    }
}

impl<S: DownloadSink, R: Rasterizer> ReportService<S, R> {
    pub fn new(renderer: TemplateRenderer, rasterizer: R, sink: S) -> Self {
        let holders = Arc::new(ContentHolders::new());
        let exporter = Exporter::new(Arc::clone(&holders), rasterizer, sink);
        Self {
            renderer,
            holders,
            exporter,
            generation_date: None,
        }
    }

    pub fn with_page_size(mut self, page_size: zoo_types::PageSize) -> Self {
        self.exporter = self.exporter.with_page_size(page_size);
        self
    }

    /// Pins the date printed on every report instead of reading the clock.
    pub fn with_generation_date(mut self, date: NaiveDate) -> Self {
        self.generation_date = Some(date);
        self
    }

    pub fn exporter(&self) -> &Exporter<R, S> {
        &self.exporter
    }

    pub fn sink(&self) -> &S {
        self.exporter.sink()
    }

    pub fn into_sink(self) -> S {
        self.exporter.into_sink()
    }

    pub fn render(&self, snapshot: &ReportSnapshot, kind: ReportKind) -> Document {
        let data = snapshot.rows(kind);
        match self.generation_date {
            Some(date) => self.renderer.render_data_on(&data, date),
            None => self.renderer.render_data(&data),
        }
    }

    /// Exports one report, under its default file name unless one is given.
    pub fn export(
        &mut self,
        snapshot: &ReportSnapshot,
        kind: ReportKind,
        file_name: Option<&str>,
    ) -> Result<ExportReceipt, ExportError> {
        let document = self.render(snapshot, kind);
        let _mounted = self.holders.mount(kind.content_id(), document)?;
        self.exporter
            .export(kind.content_id(), file_name.unwrap_or(kind.default_file_name()))
    }

    /// Exports the four reports in a fixed order, stopping at the first failure.
    pub fn export_all(
        &mut self,
        snapshot: &ReportSnapshot,
    ) -> Result<Vec<ExportReceipt>, ExportError> {
        ReportKind::ALL
            .into_iter()
            .map(|kind| self.export(snapshot, kind, None))
            .collect()
    }
}
