//! Format-agnostic row and cell value objects handed to exporter sinks

use serde::{Deserialize, Serialize};

/// The two decorative facet slots a column can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKind {
    Header,
    Footer,
}

impl FacetKind {
    /// Fixed label used to tag facet rows and their cells
    pub const fn label(self) -> &'static str {
        match self {
            FacetKind::Header => "header",
            FacetKind::Footer => "footer",
        }
    }
}

/// One cell of an export row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportCell {
    /// Column-name labels this cell belongs to. Data cells carry the
    /// column's deduplicated facet labels; facet cells carry the fixed
    /// facet-kind label.
    pub column_names: Vec<String>,
    /// Rendered text content
    pub content: String,
    /// Rows spanned; always 1 from the data-table source
    pub row_span: u32,
    /// Columns spanned; always 1 from the data-table source
    pub col_span: u32,
}

impl ExportCell {
    /// Create a 1x1 cell
    pub fn new(column_names: Vec<String>, content: impl Into<String>) -> Self {
        Self {
            column_names,
            content: content.into(),
            row_span: 1,
            col_span: 1,
        }
    }
}

/// One fully-formed row handed to an exporter sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    /// Row-name labels: the table's per-row element name for data rows,
    /// or the fixed facet label for facet rows
    pub name: Vec<String>,
    /// Grouping key; the data-table source never sets one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Facet tag; absent for data rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet: Option<FacetKind>,
    /// Cells in column declaration order
    pub cells: Vec<ExportCell>,
}

impl ExportRow {
    /// Create a data row (no facet tag, no grouping key)
    pub fn data(name: Vec<String>, cells: Vec<ExportCell>) -> Self {
        Self {
            name,
            group: None,
            facet: None,
            cells,
        }
    }

    /// Create a facet row tagged with its kind
    pub fn facet(kind: FacetKind, cells: Vec<ExportCell>) -> Self {
        Self {
            name: vec![kind.label().to_string()],
            group: None,
            facet: Some(kind),
            cells,
        }
    }

    /// Text content of each cell, in order
    pub fn cell_contents(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.content.as_str()).collect()
    }
}
