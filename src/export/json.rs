//! JSON exporter sink

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use super::{ExportRow, RowSink};

/// JSON sink; rows are buffered and serialized as one document on finish
pub struct JsonSink<W: Write> {
    writer: W,
    rows: Vec<ExportRow>,
    pretty: bool,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
            pretty: true,
        }
    }

    pub fn compact(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
            pretty: false,
        }
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    rows: &'a [ExportRow],
}

impl<W: Write> RowSink for JsonSink<W> {
    fn write_row(&mut self, row: ExportRow) -> Result<()> {
        self.rows.push(row);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = JsonDocument { rows: &self.rows };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &document)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}
