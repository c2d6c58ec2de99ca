//! gridport - export data-table widget snapshots

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use termcolor::ColorChoice;

use gridport::config::{ExportRange, OutputFormat};
use gridport::export::{RowSink, SinkFactory, TerminalSink};
use gridport::render::PlainRenderer;
use gridport::source::{DataTableSource, ExportSource};
use gridport::widget::DataTable;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Csv,
    Json,
    Html,
    Terminal,
}

impl From<CliFormat> for OutputFormat {
    fn from(f: CliFormat) -> Self {
        match f {
            CliFormat::Csv => OutputFormat::Csv,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Html => OutputFormat::Html,
            CliFormat::Terminal => OutputFormat::Terminal,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliRange {
    All,
    Page,
}

impl From<CliRange> for ExportRange {
    fn from(r: CliRange) -> Self {
        match r {
            CliRange::All => ExportRange::All,
            CliRange::Page => ExportRange::PageOnly,
        }
    }
}

/// Export a rendered data-table widget snapshot to CSV, JSON, HTML, or a terminal table
#[derive(Parser, Debug)]
#[command(name = "gridport")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Widget snapshot (JSON) to export
    snapshot: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: CliFormat,

    /// Row range to export
    #[arg(short, long, value_enum, default_value = "all")]
    range: CliRange,

    /// Write the artifact to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the visible column count and exit
    #[arg(long)]
    columns: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let file = File::open(&cli.snapshot)
        .with_context(|| format!("Failed to open snapshot: {}", cli.snapshot.display()))?;
    let table: DataTable = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse snapshot: {}", cli.snapshot.display()))?;

    let source = DataTableSource;
    let options = source.default_options().with_range(cli.range.into());

    if cli.columns {
        println!("{}", source.column_count(&table, &options));
        return Ok(());
    }

    let mut sink = create_sink(cli.format.into(), cli.output.as_deref())?;
    source.export(&table, &options, &PlainRenderer, sink.as_mut())?;
    sink.finish()?;

    Ok(())
}

fn create_sink(format: OutputFormat, output: Option<&Path>) -> Result<Box<dyn RowSink>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(SinkFactory::create(format, Box::new(file)))
        }
        // Terminal output straight to stdout keeps color support
        None if format == OutputFormat::Terminal => {
            Ok(Box::new(TerminalSink::stdout(ColorChoice::Auto)))
        }
        None => Ok(SinkFactory::create(format, Box::new(std::io::stdout()))),
    }
}
