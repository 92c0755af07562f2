//! The data table model: columns, optional filter field, and the layout
//! a widget draws from.

use std::collections::HashSet;

use ustr::Ustr;

use super::column::Column;
use super::filter::FilterState;
use super::record::{RowId, TableRecord};

/// Message shown in the placeholder row when nothing is displayed.
pub const NO_RESULTS_MESSAGE: &str = "No results.";

/// Hint text of the filter input when the caller gives none.
pub const DEFAULT_FILTER_PLACEHOLDER: &str = "Search...";

/// A searchable, column-driven table over rows of type `R`.
#[derive(Debug, Clone)]
pub struct DataTable<R> {
    columns: Vec<Column<R>>,
    filter_field: Option<Ustr>,
    filter_placeholder: Option<String>,
}

/// One displayed row, one cell per column in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: RowId,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<RenderedRow>),
    /// A single full-width row spanning `span` columns.
    Empty { message: &'static str, span: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub headers: Vec<String>,
    pub body: TableBody,
}

impl<R> DataTable<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        let table = Self {
            columns,
            filter_field: None,
            filter_placeholder: None,
        };
        debug_assert!(table.has_unique_keys(), "column keys must be unique");
        table
    }

    /// Designates `field` as the searchable field.
    pub fn with_filter(mut self, field: &str) -> Self {
        self.filter_field = Some(Ustr::from(field));
        self
    }

    pub fn with_filter_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.filter_placeholder = Some(placeholder.into());
        self
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn filter_field(&self) -> Option<&str> {
        self.filter_field.as_ref().map(Ustr::as_str)
    }

    pub fn filter_placeholder(&self) -> &str {
        self.filter_placeholder
            .as_deref()
            .unwrap_or(DEFAULT_FILTER_PLACEHOLDER)
    }

    pub fn header_labels(&self) -> Vec<&str> {
        self.columns.iter().map(Column::header).collect()
    }

    pub fn has_unique_keys(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.columns.len());
        self.columns.iter().all(|column| seen.insert(column.key()))
    }
}

impl<R: TableRecord> DataTable<R> {
    /// Rows that pass the filter, in input order.
    ///
    /// Without a filter field, or with an empty filter, every row is kept.
    pub fn displayed_rows<'r>(&self, rows: &'r [R], filter: &FilterState) -> Vec<&'r R> {
        match self.filter_field {
            Some(field) if !filter.is_empty() => rows
                .iter()
                .filter(|row| filter.matches(row.field(field.as_str()).as_ref()))
                .collect(),
            _ => rows.iter().collect(),
        }
    }

    pub fn render_row(&self, row: &R) -> RenderedRow {
        RenderedRow {
            id: row.row_id(),
            cells: self.columns.iter().map(|c| c.cell_text(row)).collect(),
        }
    }

    pub fn layout(&self, rows: &[R], filter: &FilterState) -> TableLayout {
        let headers = self.columns.iter().map(|c| c.header().to_owned()).collect();
        let displayed = self.displayed_rows(rows, filter);

        let body = if displayed.is_empty() {
            TableBody::Empty {
                message: NO_RESULTS_MESSAGE,
                span: self.columns.len(),
            }
        } else {
            TableBody::Rows(displayed.into_iter().map(|row| self.render_row(row)).collect())
        };

        TableLayout { headers, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{FieldValue, Record};

    fn people() -> Vec<Record> {
        vec![
            Record::new().with("id", 1).with("name", "Alice").with("age", 30),
            Record::new().with("id", 2).with("name", "Bob").with("age", 25),
            Record::new().with("id", 3).with("name", "Natalia").with("age", 41),
            Record::new().with("id", 4).with("age", 52),
        ]
    }

    fn table() -> DataTable<Record> {
        DataTable::new(vec![
            Column::accessor("name", "Name"),
            Column::accessor("age", "Age"),
        ])
        .with_filter("name")
    }

    fn ids(rows: &[&Record]) -> Vec<String> {
        rows.iter().map(|r| r.row_id()).collect()
    }

    #[test]
    fn filter_keeps_matching_rows_in_order() {
        let rows = people();
        let mut filter = FilterState::new();
        filter.set("al");

        let shown = table().displayed_rows(&rows, &filter);
        assert_eq!(ids(&shown), vec!["1", "3"]);
    }

    #[test]
    fn scenario_alice_bob() {
        let columns = vec![
            Column::<Record>::display("name", "Name"),
            Column::display("age", "Age"),
        ];
        let rows = vec![
            Record::new().with("id", 1).with("name", "Alice").with("age", 30),
            Record::new().with("id", 2).with("name", "Bob").with("age", 25),
        ];
        let table = DataTable::new(columns).with_filter("name");
        let mut filter = FilterState::new();
        filter.set("al");

        let shown = table.displayed_rows(&rows, &filter);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].row_id().as_str(), "1");
    }

    #[test]
    fn empty_filter_shows_everything() {
        let rows = people();
        let shown = table().displayed_rows(&rows, &FilterState::new());
        assert_eq!(shown.len(), rows.len());
    }

    #[test]
    fn no_filter_field_ignores_filter_text() {
        let rows = people();
        let table = DataTable::new(vec![Column::<Record>::accessor("name", "Name")]);
        let mut filter = FilterState::new();
        filter.set("zzz");
        assert_eq!(table.displayed_rows(&rows, &filter).len(), rows.len());
    }

    #[test]
    fn filtering_is_idempotent() {
        let rows = people();
        let mut filter = FilterState::new();
        filter.set("A");
        let table = table();

        let once: Vec<Record> = table
            .displayed_rows(&rows, &filter)
            .into_iter()
            .cloned()
            .collect();
        let twice = table.displayed_rows(&once, &filter);
        assert_eq!(ids(&twice), ids(&once.iter().collect::<Vec<_>>()));
    }

    #[test]
    fn row_missing_filter_field_is_excluded() {
        let rows = people();
        let mut filter = FilterState::new();
        filter.set("a");
        let shown = table().displayed_rows(&rows, &filter);
        assert!(shown.iter().all(|r| r.row_id().as_str() != "4"));
    }

    #[test]
    fn layout_renders_cells_in_column_order() {
        let rows = people();
        let layout = table().layout(&rows[..2], &FilterState::new());

        assert_eq!(layout.headers, vec!["Name", "Age"]);
        let TableBody::Rows(rendered) = layout.body else {
            panic!("expected rows");
        };
        assert_eq!(rendered[0].id.as_str(), "1");
        assert_eq!(rendered[0].cells, vec!["Alice", "30"]);
        assert_eq!(rendered[1].cells, vec!["Bob", "25"]);
    }

    #[test]
    fn empty_result_yields_one_placeholder_spanning_all_columns() {
        let rows = people();
        let mut filter = FilterState::new();
        filter.set("nobody");

        let layout = table().layout(&rows, &filter);
        assert_eq!(
            layout.body,
            TableBody::Empty {
                message: NO_RESULTS_MESSAGE,
                span: 2
            }
        );
    }

    #[test]
    fn empty_input_yields_placeholder() {
        let layout = table().layout(&[], &FilterState::new());
        assert!(matches!(layout.body, TableBody::Empty { span: 2, .. }));
    }

    #[test]
    fn render_rule_is_applied_in_layout() {
        let table = DataTable::new(vec![
            Column::<Record>::accessor("name", "Name"),
            Column::display("label", "Label").with_render(|row: &Record| {
                let age = row.field("age").map(|v| v.to_display_text()).unwrap_or_default();
                format!("{age} years")
            }),
        ]);
        let rows = people();
        let TableBody::Rows(rendered) = table.layout(&rows[..1], &FilterState::new()).body else {
            panic!("expected rows");
        };
        assert_eq!(rendered[0].cells, vec!["Alice", "30 years"]);
    }

    #[test]
    fn placeholder_defaults_and_overrides() {
        assert_eq!(table().filter_placeholder(), DEFAULT_FILTER_PLACEHOLDER);
        let custom = table().with_filter_placeholder("Filter by name");
        assert_eq!(custom.filter_placeholder(), "Filter by name");
        assert_eq!(custom.filter_field(), Some("name"));
    }

    #[test]
    fn duplicate_keys_are_detected() {
        let table = DataTable {
            columns: vec![
                Column::<Record>::accessor("name", "Name"),
                Column::display("name", "Again"),
            ],
            filter_field: None,
            filter_placeholder: None,
        };
        assert!(!table.has_unique_keys());
    }

    #[test]
    fn typed_rows_work_too() {
        struct Patient {
            id: u32,
            name: &'static str,
        }

        impl TableRecord for Patient {
            fn row_id(&self) -> RowId {
                self.id.to_string()
            }

            fn field(&self, name: &str) -> Option<FieldValue> {
                match name {
                    "name" => Some(FieldValue::from(self.name)),
                    _ => None,
                }
            }
        }

        let rows = [
            Patient { id: 1, name: "Ada" },
            Patient { id: 2, name: "Grace" },
        ];
        let table = DataTable::new(vec![Column::<Patient>::accessor("name", "Name")]).with_filter("name");
        let mut filter = FilterState::new();
        filter.set("GR");
        let shown = table.displayed_rows(&rows, &filter);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, 2);
    }
}
