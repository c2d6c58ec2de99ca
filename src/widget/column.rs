//! Column descriptors resolved from the widget tree

use serde::{Deserialize, Serialize};

use crate::export::FacetKind;

use super::Component;

/// A column of the table widget.
///
/// Visibility is explicit data resolved when the snapshot is taken, so
/// discovery never has to probe the live component tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Whether the column is currently rendered
    #[serde(default = "visible_default")]
    pub visible: bool,
    /// Optional header facet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Component>,
    /// Optional footer facet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Component>,
    /// Components rendered for each row's cell, in order
    #[serde(default)]
    pub cells: Vec<Component>,
}

fn visible_default() -> bool {
    true
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnSpec {
    /// Create a visible column with no facets and an empty cell template
    pub fn new() -> Self {
        Self {
            visible: true,
            header: None,
            footer: None,
            cells: Vec::new(),
        }
    }

    /// Set the header facet
    pub fn with_header(mut self, header: Component) -> Self {
        self.header = Some(header);
        self
    }

    /// Set the footer facet
    pub fn with_footer(mut self, footer: Component) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Append a component to the cell template
    pub fn with_cell(mut self, cell: Component) -> Self {
        self.cells.push(cell);
        self
    }

    /// Mark the column as not rendered
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Look up the facet component for the given kind
    pub fn facet(&self, kind: FacetKind) -> Option<&Component> {
        match kind {
            FacetKind::Header => self.header.as_ref(),
            FacetKind::Footer => self.footer.as_ref(),
        }
    }
}
