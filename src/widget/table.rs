//! DataTable widget, backing rows, and cell values

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{ColumnSpec, Component};

/// A typed cell value in a backing row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Text representation used when rendering the value into a cell.
    /// Null renders as empty text, the way the host framework renders it.
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed(""),
            CellValue::Bool(b) => Cow::Owned(b.to_string()),
            CellValue::Int(i) => Cow::Owned(i.to_string()),
            CellValue::Float(f) => Cow::Owned(f.to_string()),
            CellValue::String(s) => Cow::Borrowed(s.as_str()),
            CellValue::Date(d) => Cow::Owned(d.to_string()),
            CellValue::DateTime(dt) => Cow::Owned(dt.to_string()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// One backing record: an ordered field-name to value map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowData {
    fields: IndexMap<String, CellValue>,
}

impl RowData {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, keeping insertion order
    pub fn with(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields.get(name)
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// A direct child of the table widget
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableChild {
    /// A column of the table
    Column(ColumnSpec),
    /// Any other child (caption, toolbar, separator); skipped by column discovery
    Other(Component),
}

/// A rendered data-table widget plus its backing dataset.
///
/// The page window (`first`, `page_size`) describes what is currently
/// displayed; the backing `rows` may be much larger. There is no row
/// cursor: readers address rows by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTable {
    /// Direct children in declaration order
    #[serde(default)]
    pub children: Vec<TableChild>,
    /// Backing dataset
    #[serde(default)]
    pub rows: Vec<RowData>,
    /// Index of the first row of the currently displayed page
    #[serde(default)]
    pub first: usize,
    /// Number of rows in the displayed page
    #[serde(default)]
    pub page_size: usize,
    /// Declared element name for data rows
    #[serde(default = "row_name_default")]
    pub row_name: String,
}

fn row_name_default() -> String {
    "row".to_string()
}

impl DataTable {
    /// Create an empty table with the given per-row element name
    pub fn new(row_name: impl Into<String>) -> Self {
        Self {
            children: Vec::new(),
            rows: Vec::new(),
            first: 0,
            page_size: 0,
            row_name: row_name.into(),
        }
    }

    /// Append a column child
    pub fn with_column(mut self, column: ColumnSpec) -> Self {
        self.children.push(TableChild::Column(column));
        self
    }

    /// Append a non-column child
    pub fn with_other(mut self, component: Component) -> Self {
        self.children.push(TableChild::Other(component));
        self
    }

    /// Append a backing row
    pub fn with_row(mut self, row: RowData) -> Self {
        self.rows.push(row);
        self
    }

    /// Set the displayed page window
    pub fn with_page(mut self, first: usize, page_size: usize) -> Self {
        self.first = first;
        self.page_size = page_size;
        self
    }

    /// Total number of backing rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Fetch a backing row by index
    pub fn row(&self, index: usize) -> Option<&RowData> {
        self.rows.get(index)
    }

    /// Direct children that are columns and currently visible, in
    /// declaration order. Non-column children and hidden columns are
    /// excluded.
    pub fn visible_columns(&self) -> Vec<&ColumnSpec> {
        self.children
            .iter()
            .filter_map(|child| match child {
                TableChild::Column(column) if column.visible => Some(column),
                _ => None,
            })
            .collect()
    }
}
