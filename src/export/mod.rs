//! Exporter sinks that serialize export rows into output artifacts

mod csv;
mod html;
mod json;
mod row;
mod terminal;

use std::io::Write;

use anyhow::Result;

use crate::config::OutputFormat;

pub use self::csv::CsvSink;
pub use self::html::HtmlSink;
pub use self::json::JsonSink;
pub use self::row::{ExportCell, ExportRow, FacetKind};
pub use self::terminal::TerminalSink;

/// Trait for exporter sinks.
///
/// An export source hands rows over one at a time, in artifact order; a
/// sink never sees them batched. `finish` flushes formats that can only
/// be serialized once every row is known, and is the outer caller's job,
/// not the source's.
pub trait RowSink {
    /// Incorporate one row into the output artifact
    fn write_row(&mut self, row: ExportRow) -> Result<()>;

    /// Finalize the artifact
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Sink that collects rows in memory, for post-processing callers and tests
#[derive(Debug, Default)]
pub struct MemorySink {
    rows: Vec<ExportRow>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows received so far, in call order
    pub fn rows(&self) -> &[ExportRow] {
        &self.rows
    }

    /// Consume the sink, returning the collected rows
    pub fn into_rows(self) -> Vec<ExportRow> {
        self.rows
    }
}

impl RowSink for MemorySink {
    fn write_row(&mut self, row: ExportRow) -> Result<()> {
        self.rows.push(row);
        Ok(())
    }
}

/// Factory for creating sinks over a writer
pub struct SinkFactory;

impl SinkFactory {
    /// Create a sink for the given output format
    pub fn create(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn RowSink> {
        match format {
            OutputFormat::Csv => Box::new(CsvSink::new(writer)),
            OutputFormat::Json => Box::new(JsonSink::new(writer)),
            OutputFormat::Html => Box::new(HtmlSink::new(writer)),
            OutputFormat::Terminal => Box::new(TerminalSink::plain(writer)),
        }
    }
}
