//! Standalone HTML document exporter sink

use std::io::Write;

use anyhow::Result;

use super::{ExportCell, ExportRow, FacetKind, RowSink};

/// Sink that renders the export as a standalone HTML document.
///
/// Header facet rows become `<thead>`, footer facet rows `<tfoot>`, and
/// data rows `<tbody>`; all cell text is escaped.
pub struct HtmlSink<W: Write> {
    writer: W,
    title: String,
    rows: Vec<ExportRow>,
}

impl<W: Write> HtmlSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            title: "gridport export".to_string(),
            rows: Vec::new(),
        }
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl<W: Write> RowSink for HtmlSink<W> {
    fn write_row(&mut self, row: ExportRow) -> Result<()> {
        self.rows.push(row);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let writer = &mut self.writer;

        writeln!(writer, "<!DOCTYPE html>")?;
        writeln!(writer, "<html lang=\"en\">")?;
        writeln!(writer, "<head>")?;
        writeln!(writer, "  <meta charset=\"UTF-8\">")?;
        writeln!(writer, "  <title>{}</title>", html_escape(&self.title))?;
        writeln!(writer, "  <style>")?;
        writeln!(writer, "{}", CSS_STYLES)?;
        writeln!(writer, "  </style>")?;
        writeln!(writer, "</head>")?;
        writeln!(writer, "<body>")?;
        writeln!(writer, "  <h1>{}</h1>", html_escape(&self.title))?;
        writeln!(writer, "  <table>")?;

        let headers: Vec<_> = self
            .rows
            .iter()
            .filter(|r| r.facet == Some(FacetKind::Header))
            .collect();
        if !headers.is_empty() {
            writeln!(writer, "    <thead>")?;
            for row in headers {
                write_tr(writer, row, "th")?;
            }
            writeln!(writer, "    </thead>")?;
        }

        let footers: Vec<_> = self
            .rows
            .iter()
            .filter(|r| r.facet == Some(FacetKind::Footer))
            .collect();
        if !footers.is_empty() {
            writeln!(writer, "    <tfoot>")?;
            for row in footers {
                write_tr(writer, row, "td")?;
            }
            writeln!(writer, "    </tfoot>")?;
        }

        writeln!(writer, "    <tbody>")?;
        for row in self.rows.iter().filter(|r| r.facet.is_none()) {
            write_tr(writer, row, "td")?;
        }
        writeln!(writer, "    </tbody>")?;

        writeln!(writer, "  </table>")?;
        writeln!(writer, "</body>")?;
        writeln!(writer, "</html>")?;

        Ok(())
    }
}

fn write_tr(writer: &mut dyn Write, row: &ExportRow, tag: &str) -> Result<()> {
    writeln!(writer, "      <tr>")?;
    for cell in &row.cells {
        write_cell(writer, cell, tag)?;
    }
    writeln!(writer, "      </tr>")?;
    Ok(())
}

fn write_cell(writer: &mut dyn Write, cell: &ExportCell, tag: &str) -> Result<()> {
    write!(writer, "        <{}", tag)?;
    if cell.col_span > 1 {
        write!(writer, " colspan=\"{}\"", cell.col_span)?;
    }
    if cell.row_span > 1 {
        write!(writer, " rowspan=\"{}\"", cell.row_span)?;
    }
    writeln!(writer, ">{}</{}>", html_escape(&cell.content), tag)?;
    Ok(())
}

fn html_escape(s: impl AsRef<str>) -> String {
    s.as_ref()
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const CSS_STYLES: &str = r#"    body {
      font-family: 'JetBrains Mono', 'Fira Code', monospace;
      background: #1a1b26;
      color: #a9b1d6;
      padding: 2rem;
      line-height: 1.6;
    }

    h1 {
      color: #7aa2f7;
      font-size: 1.5rem;
      margin-bottom: 1rem;
    }

    table {
      border-collapse: collapse;
    }

    th, td {
      text-align: left;
      padding: 0.5rem 0.75rem;
      border: 1px solid #414868;
    }

    thead th {
      background: rgba(255,255,255,0.05);
      font-weight: 600;
    }

    tfoot td {
      background: rgba(255,255,255,0.03);
      font-style: italic;
    }"#;
