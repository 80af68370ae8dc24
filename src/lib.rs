//! Zoo operations reports.
//!
//! Display rows are aggregated from a [`ReportSnapshot`], rendered into a
//! structured document per [`ReportKind`] and exported as a paginated PDF.

pub mod config;
pub mod error;
pub mod exporter;
pub mod holder;
pub mod service;
pub mod snapshot;
pub mod store;

pub use config::ReportConfig;
pub use error::{ConfigError, ExportError, PipelineError};
pub use exporter::{
    DirectorySink, DownloadSink, ExportReceipt, ExportState, Exporter, MemorySink,
};
pub use holder::{ContentHolders, MountedContent};
pub use service::ReportService;
pub use snapshot::ReportSnapshot;
pub use store::{DataStore, Direction, Query, SnapshotStore, StoreError};

pub use zoo_idf::Document;
pub use zoo_layout::{LayoutEngine, RasterError, Rasterizer};
pub use zoo_template::{Locale, ReportData, ReportKind, TemplateRenderer};
