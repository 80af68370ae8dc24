use clap::Parser;
use std::path::PathBuf;
use zoo_report::{
    DirectorySink, PipelineError, ReportConfig, ReportKind, ReportService, ReportSnapshot,
    SnapshotStore,
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// `None` selects every report kind.
fn selected_kind(arg: &str) -> Result<Option<ReportKind>, PipelineError> {
    if arg.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Ok(Some(arg.parse::<ReportKind>()?))
}

/// Generate zoo operations reports as PDF files from a data snapshot.
#[derive(Parser, Debug)]
#[command(name = "zoo-report", version)]
struct Cli {
    /// JSON object of table name to rows.
    #[arg(long)]
    snapshot: PathBuf,

    /// Report configuration (camelCase JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory; overrides `outputDir` from the config.
    #[arg(long)]
    out: Option<PathBuf>,

    /// inventory, animal-health, cleaning, ticket-sales or all.
    #[arg(long, default_value = "all")]
    kind: String,

    /// File name for a single report.
    #[arg(long)]
    file_name: Option<String>,
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("zoo_report=info"))
        .init();

    let cli = Cli::parse();
    let kind = selected_kind(&cli.kind)?;
    if cli.file_name.is_some() && kind.is_none() {
        return Err(PipelineError::Usage(
            "--file-name needs a single --kind".to_string(),
        ));
    }

    let mut config = match &cli.config {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };
    if let Some(out) = cli.out {
        config.output_dir = out;
    }

    let store = SnapshotStore::from_file(&cli.snapshot)?;
    let snapshot = ReportSnapshot::load(&store)?;

    let sink = DirectorySink::new(&config.output_dir);
    let mut service = ReportService::from_config(&config, sink);

    let receipts = match kind {
        None => service.export_all(&snapshot)?,
        Some(kind) => vec![service.export(&snapshot, kind, cli.file_name.as_deref())?],
    };

    for receipt in receipts {
        println!(
            "{} ({} pages, {} bytes)",
            service.sink().path_for(&receipt.file_name).display(),
            receipt.page_count,
            receipt.byte_size
        );
    }
    Ok(())
}
