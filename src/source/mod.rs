//! Export sources: widgets that know how to feed rows to a sink

mod datatable;

use anyhow::Result;

use crate::export::RowSink;
use crate::render::ComponentRenderer;

pub use datatable::DataTableSource;

/// Trait implemented by widget-specific export sources.
///
/// A source advertises a stable kind identifier, its default
/// configuration, and a column count to a generic export registry, and
/// walks its widget handing fully-formed rows to the sink one at a time,
/// in artifact order.
pub trait ExportSource {
    /// The widget type this source exports
    type Widget;
    /// Source-specific configuration
    type Options: Default;

    /// Stable kind identifier for registry lookup
    fn kind(&self) -> &'static str;

    /// Default configuration for this source
    fn default_options(&self) -> Self::Options {
        Self::Options::default()
    }

    /// Number of columns the export will produce
    fn column_count(&self, widget: &Self::Widget, options: &Self::Options) -> usize;

    /// Walk the widget and feed the sink. Any renderer or sink failure
    /// aborts the export and propagates unchanged.
    fn export(
        &self,
        widget: &Self::Widget,
        options: &Self::Options,
        renderer: &dyn ComponentRenderer,
        sink: &mut dyn RowSink,
    ) -> Result<()>;
}
