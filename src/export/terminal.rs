//! Terminal exporter sink

use std::io::Write;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use super::{ExportRow, RowSink};

/// Sink that draws the export as a boxed table on a terminal.
///
/// Rows are buffered and drawn on `finish`, keeping the order the source
/// emitted them (header facet first, footer facet last).
pub struct TerminalSink<W: WriteColor> {
    writer: W,
    rows: Vec<ExportRow>,
}

impl TerminalSink<StandardStream> {
    /// Sink writing to stdout with the given color choice
    pub fn stdout(choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: Write> TerminalSink<NoColor<W>> {
    /// Sink writing plain text to any writer
    pub fn plain(writer: W) -> Self {
        Self::new(NoColor::new(writer))
    }
}

impl<W: WriteColor> TerminalSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
        }
    }
}

impl<W: WriteColor> RowSink for TerminalSink<W> {
    fn write_row(&mut self, row: ExportRow) -> Result<()> {
        self.rows.push(row);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.rows.is_empty() {
            let mut builder = Builder::default();
            for row in &self.rows {
                builder.push_record(row.cells.iter().map(|c| c.content.as_str()));
            }
            let mut table = builder.build();
            table.with(Style::sharp());
            writeln!(self.writer, "{}", table)?;
        }

        let data_count = self.rows.iter().filter(|r| r.facet.is_none()).count();
        self.writer
            .set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(self.writer, "{} rows", data_count)?;
        self.writer.reset()?;
        writeln!(self.writer, " exported")?;

        Ok(())
    }
}
