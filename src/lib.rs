//! gridport - Export rendered data-table widgets to tabular artifacts
//!
//! Walks a typed snapshot of a server-rendered data-table widget and feeds
//! its header, footer, and row cell text, one row at a time, into
//! format-agnostic exporter sinks (CSV, JSON, HTML, terminal).

pub mod config;
pub mod export;
pub mod render;
pub mod source;
pub mod widget;

pub use config::{ExportOptions, ExportRange, OutputFormat};
pub use source::{DataTableSource, ExportSource};
pub use widget::DataTable;
