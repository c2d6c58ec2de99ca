//! Export source for data-table widgets

use std::ops::Range;
use std::slice;

use anyhow::Result;
use indexmap::IndexSet;

use crate::config::{ExportOptions, ExportRange};
use crate::export::{ExportCell, ExportRow, FacetKind, RowSink};
use crate::render::ComponentRenderer;
use crate::widget::{ColumnSpec, DataTable};

use super::ExportSource;

/// Export source for [`DataTable`] widgets.
///
/// The export is a straight-line sequence: discover visible columns, emit
/// the header facet row, emit one row per index in the selected range in
/// ascending order, emit the footer facet row. Nothing is batched and no
/// state survives the call.
pub struct DataTableSource;

impl ExportSource for DataTableSource {
    type Widget = DataTable;
    type Options = ExportOptions;

    fn kind(&self) -> &'static str {
        "data-table"
    }

    fn column_count(&self, widget: &DataTable, _options: &ExportOptions) -> usize {
        widget.visible_columns().len()
    }

    fn export(
        &self,
        widget: &DataTable,
        options: &ExportOptions,
        renderer: &dyn ComponentRenderer,
        sink: &mut dyn RowSink,
    ) -> Result<()> {
        let columns = widget.visible_columns();

        let column_names = export_facet(FacetKind::Header, &columns, renderer, sink)?;

        export_rows(
            widget,
            &columns,
            &column_names,
            row_range(widget, options.range),
            renderer,
            sink,
        )?;

        export_facet(FacetKind::Footer, &columns, renderer, sink)?;

        Ok(())
    }
}

/// Half-open row-index range the export visits. A page window is taken as
/// declared, without clamping to the backing row count.
fn row_range(widget: &DataTable, range: ExportRange) -> Range<usize> {
    match range {
        ExportRange::All => 0..widget.row_count(),
        ExportRange::PageOnly => widget.first..widget.first + widget.page_size,
    }
}

/// Resolve one facet label list per column, emitting the facet row when at
/// least one column carries the facet. Returns the per-column label lists
/// collapsed to unique values in first-seen order; these become the
/// column-name tags for data cells. Columns without the facet get an
/// empty list.
fn export_facet(
    kind: FacetKind,
    columns: &[&ColumnSpec],
    renderer: &dyn ComponentRenderer,
    sink: &mut dyn RowSink,
) -> Result<Vec<Vec<String>>> {
    let mut labels: Vec<Vec<String>> = Vec::with_capacity(columns.len());
    for column in columns {
        match column.facet(kind) {
            Some(facet) => labels.push(vec![renderer.render(slice::from_ref(facet), None)?]),
            None => labels.push(Vec::new()),
        }
    }

    if labels.iter().any(|label| !label.is_empty()) {
        let facet_name = vec![kind.label().to_string()];
        let cells = labels
            .iter()
            .map(|label| {
                // Facet cells are tagged by role, not by column identity.
                ExportCell::new(
                    facet_name.clone(),
                    label.first().cloned().unwrap_or_default(),
                )
            })
            .collect();
        sink.write_row(ExportRow::facet(kind, cells))?;
    }

    Ok(labels
        .into_iter()
        .map(|label| {
            label
                .into_iter()
                .collect::<IndexSet<_>>()
                .into_iter()
                .collect()
        })
        .collect())
}

/// Emit one data row per index in `range`, ascending, handing each to the
/// sink immediately. Indices past the backing rows are still visited;
/// their cells render empty.
fn export_rows(
    widget: &DataTable,
    columns: &[&ColumnSpec],
    column_names: &[Vec<String>],
    range: Range<usize>,
    renderer: &dyn ComponentRenderer,
    sink: &mut dyn RowSink,
) -> Result<()> {
    let row_name = vec![widget.row_name.clone()];

    for index in range {
        let row = widget.row(index);

        let mut cells = Vec::with_capacity(columns.len());
        for (column, names) in columns.iter().zip(column_names) {
            let content = renderer.render(&column.cells, row)?;
            cells.push(ExportCell::new(names.clone(), content));
        }

        sink.write_row(ExportRow::data(row_name.clone(), cells))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::MemorySink;
    use crate::render::PlainRenderer;
    use crate::widget::{Component, RowData};

    fn column(header: Option<&str>, field: &str) -> ColumnSpec {
        let mut column = ColumnSpec::new().with_cell(Component::field(field));
        if let Some(header) = header {
            column = column.with_header(Component::text(header));
        }
        column
    }

    /// Three visible columns with headers, two backing rows, no footers.
    fn sample_table() -> DataTable {
        DataTable::new("person")
            .with_column(column(Some("Name"), "name"))
            .with_column(column(Some("Age"), "age"))
            .with_column(column(Some("City"), "city"))
            .with_row(
                RowData::new()
                    .with("name", "Ada")
                    .with("age", 36i64)
                    .with("city", "London"),
            )
            .with_row(
                RowData::new()
                    .with("name", "Grace")
                    .with("age", 45i64)
                    .with("city", "Arlington"),
            )
    }

    fn export(table: &DataTable, options: &ExportOptions) -> Vec<ExportRow> {
        let mut sink = MemorySink::new();
        DataTableSource
            .export(table, options, &PlainRenderer, &mut sink)
            .unwrap();
        sink.into_rows()
    }

    #[test]
    fn test_header_then_data_rows_no_footer() {
        let rows = export(&sample_table(), &ExportOptions::new());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].facet, Some(FacetKind::Header));
        assert_eq!(rows[0].cell_contents(), vec!["Name", "Age", "City"]);
        assert_eq!(rows[1].facet, None);
        assert_eq!(rows[1].cell_contents(), vec!["Ada", "36", "London"]);
        assert_eq!(rows[2].cell_contents(), vec!["Grace", "45", "Arlington"]);
    }

    #[test]
    fn test_data_rows_carry_row_name_and_no_group() {
        let rows = export(&sample_table(), &ExportOptions::new());

        for row in rows.iter().filter(|r| r.facet.is_none()) {
            assert_eq!(row.name, vec!["person".to_string()]);
            assert!(row.group.is_none());
        }
    }

    #[test]
    fn test_data_cells_tagged_with_column_labels() {
        let rows = export(&sample_table(), &ExportOptions::new());

        let names: Vec<_> = rows[1]
            .cells
            .iter()
            .map(|c| c.column_names.clone())
            .collect();
        assert_eq!(
            names,
            vec![
                vec!["Name".to_string()],
                vec!["Age".to_string()],
                vec!["City".to_string()],
            ]
        );
    }

    #[test]
    fn test_facet_row_tagged_by_role_not_column() {
        let rows = export(&sample_table(), &ExportOptions::new());

        assert_eq!(rows[0].name, vec!["header".to_string()]);
        for cell in &rows[0].cells {
            assert_eq!(cell.column_names, vec!["header".to_string()]);
        }
    }

    #[test]
    fn test_no_header_row_when_all_facets_absent() {
        let table = DataTable::new("person")
            .with_column(column(None, "name"))
            .with_column(column(None, "age"))
            .with_row(RowData::new().with("name", "Ada").with("age", 36i64));

        let rows = export(&table, &ExportOptions::new());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].facet, None);
        assert_eq!(rows[0].cell_contents(), vec!["Ada", "36"]);
        // Columns without a header still tag their cells, with nothing.
        for cell in &rows[0].cells {
            assert!(cell.column_names.is_empty());
        }
    }

    #[test]
    fn test_single_labeled_column_forces_facet_row() {
        let table = DataTable::new("person")
            .with_column(column(None, "name"))
            .with_column(column(Some("Age"), "age"))
            .with_row(RowData::new().with("name", "Ada").with("age", 36i64));

        let rows = export(&table, &ExportOptions::new());

        assert_eq!(rows[0].facet, Some(FacetKind::Header));
        assert_eq!(rows[0].cell_contents(), vec!["", "Age"]);
    }

    #[test]
    fn test_empty_header_text_still_counts_as_present() {
        let table = DataTable::new("person")
            .with_column(column(Some(""), "name"))
            .with_row(RowData::new().with("name", "Ada"));

        let rows = export(&table, &ExportOptions::new());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].facet, Some(FacetKind::Header));
        assert_eq!(rows[1].cells[0].column_names, vec![String::new()]);
    }

    #[test]
    fn test_footer_row_follows_all_data_rows() {
        let table = DataTable::new("person")
            .with_column(
                column(Some("Name"), "name").with_footer(Component::text("2 people")),
            )
            .with_row(RowData::new().with("name", "Ada"))
            .with_row(RowData::new().with("name", "Grace"));

        let rows = export(&table, &ExportOptions::new());

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].facet, Some(FacetKind::Header));
        assert_eq!(rows[3].facet, Some(FacetKind::Footer));
        assert_eq!(rows[3].name, vec!["footer".to_string()]);
        assert_eq!(rows[3].cell_contents(), vec!["2 people"]);
    }

    #[test]
    fn test_hidden_columns_and_non_column_children_excluded() {
        let table = DataTable::new("person")
            .with_other(Component::text("caption"))
            .with_column(column(Some("Name"), "name"))
            .with_column(column(Some("Secret"), "secret").hidden())
            .with_column(column(Some("City"), "city"))
            .with_row(
                RowData::new()
                    .with("name", "Ada")
                    .with("secret", "x")
                    .with("city", "London"),
            );

        assert_eq!(
            DataTableSource.column_count(&table, &ExportOptions::new()),
            2
        );

        let rows = export(&table, &ExportOptions::new());
        assert_eq!(rows[0].cell_contents(), vec!["Name", "City"]);
        assert_eq!(rows[1].cell_contents(), vec!["Ada", "London"]);
    }

    #[test]
    fn test_all_range_visits_every_row_ascending() {
        let mut table = DataTable::new("item").with_column(column(None, "i"));
        for i in 0..10i64 {
            table = table.with_row(RowData::new().with("i", i));
        }
        table = table.with_page(4, 3);

        let rows = export(&table, &ExportOptions::new());

        let contents: Vec<_> = rows.iter().map(|r| r.cell_contents()[0].to_string()).collect();
        let expected: Vec<_> = (0..10).map(|i| i.to_string()).collect();
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_page_only_visits_displayed_window() {
        let mut table = DataTable::new("item").with_column(column(None, "i"));
        for i in 0..20i64 {
            table = table.with_row(RowData::new().with("i", i));
        }
        table = table.with_page(10, 5);

        let options = ExportOptions::new().with_range(ExportRange::PageOnly);
        let rows = export(&table, &options);

        let contents: Vec<_> = rows.iter().map(|r| r.cell_contents()[0].to_string()).collect();
        assert_eq!(contents, vec!["10", "11", "12", "13", "14"]);
    }

    #[test]
    fn test_page_window_is_not_clamped_to_backing_rows() {
        let table = DataTable::new("item")
            .with_column(column(None, "i"))
            .with_row(RowData::new().with("i", 0i64))
            .with_row(RowData::new().with("i", 1i64))
            .with_page(1, 3);

        let options = ExportOptions::new().with_range(ExportRange::PageOnly);
        let rows = export(&table, &options);

        // Indices 2 and beyond have no backing row; cells render empty.
        let contents: Vec<_> = rows.iter().map(|r| r.cell_contents()[0].to_string()).collect();
        assert_eq!(contents, vec!["1", "", ""]);
    }

    #[test]
    fn test_kind_and_default_options() {
        assert_eq!(DataTableSource.kind(), "data-table");
        assert_eq!(
            DataTableSource.default_options().range,
            ExportRange::All
        );
    }

    #[test]
    fn test_renderer_failure_aborts_export() {
        let table = DataTable::new("person")
            .with_column(
                ColumnSpec::new()
                    .with_header(Component::text("Joined"))
                    .with_cell(Component::formatted("age", "%Y")),
            )
            .with_row(RowData::new().with("age", 36i64))
            .with_row(RowData::new().with("age", 45i64));

        let mut sink = MemorySink::new();
        let result = DataTableSource.export(
            &table,
            &ExportOptions::new(),
            &PlainRenderer,
            &mut sink,
        );

        assert!(result.is_err());
        // The header facet row made it out before the failure.
        assert_eq!(sink.rows().len(), 1);
        assert_eq!(sink.rows()[0].facet, Some(FacetKind::Header));
    }

    #[test]
    fn test_label_lists_collapse_to_first_seen_order() {
        let columns = [
            &ColumnSpec::new().with_header(Component::text("Name")),
            &ColumnSpec::new(),
        ];
        let mut sink = MemorySink::new();

        let names =
            export_facet(FacetKind::Header, &columns, &PlainRenderer, &mut sink).unwrap();

        assert_eq!(names, vec![vec!["Name".to_string()], Vec::new()]);
    }
}
