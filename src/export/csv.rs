//! CSV exporter sink

use std::io::Write;

use anyhow::Result;

use super::{ExportRow, RowSink};

/// Streaming CSV sink; every export row becomes one record as it arrives
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().flexible(true).from_writer(writer),
        }
    }
}

impl<W: Write> RowSink for CsvSink<W> {
    fn write_row(&mut self, row: ExportRow) -> Result<()> {
        self.writer
            .write_record(row.cells.iter().map(|c| c.content.as_str()))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
