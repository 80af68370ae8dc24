#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use chrono::NaiveDate;
use lopdf::Document as LopdfDocument;
use zoo_report::{MemorySink, ReportConfig, ReportService};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The date every test report is stamped with.
pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// A service that keeps exported files in memory and prints a fixed date.
pub fn memory_service(config: &ReportConfig) -> ReportService<MemorySink> {
    init_logger();
    ReportService::from_config(config, MemorySink::new()).with_generation_date(report_date())
}

/// Loads a file delivered to a memory sink.
pub fn delivered_pdf(
    sink: &MemorySink,
    file_name: &str,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = sink
        .get(file_name)
        .ok_or_else(|| format!("no file named {}", file_name))?;
    GeneratedPdf::from_bytes(bytes.to_vec())
}
