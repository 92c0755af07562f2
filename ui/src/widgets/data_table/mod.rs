//! Filterable table widget drawn from a [`DataTable`] model.
//!
//! The widget is split into small pieces:
//! - `columns`: column sizing
//! - `header`: the header row
//! - `body`: data rows and the "no results" strip

mod body;
mod columns;
mod header;

use egui::{Response, TextEdit, Ui};
use egui_extras::TableBuilder;
use eyesentry_business::table::{DataTable, FilterState, TableBody, TableRecord};

use columns::{FILTER_WIDTH, HEADER_HEIGHT};

/// Per-instance widget state. Dropped with the page that owns it.
#[derive(Debug, Clone, Default)]
pub struct DataTableState {
    pub filter: FilterState,
}

impl DataTableState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Draws the filter box (when the table has a filter field), the header
/// row and the displayed rows.
///
/// Editing the filter takes effect in the same frame.
pub fn data_table<R: TableRecord>(
    ui: &mut Ui,
    id_salt: impl std::hash::Hash,
    table: &DataTable<R>,
    rows: &[R],
    state: &mut DataTableState,
) -> Response {
    ui.vertical(|ui| {
        if table.filter_field().is_some() {
            ui.add(
                TextEdit::singleline(state.filter.text_mut())
                    .hint_text(table.filter_placeholder())
                    .desired_width(FILTER_WIDTH),
            );
            ui.add_space(8.0);
        }

        let layout = table.layout(rows, &state.filter);

        let mut builder = TableBuilder::new(ui)
            .id_salt(id_salt)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
        for column in columns::table_columns(layout.headers.len()) {
            builder = builder.column(column);
        }

        builder
            .header(HEADER_HEIGHT, |mut row| {
                header::render_table_header(&mut row, &layout.headers);
            })
            .body(|body| {
                if let TableBody::Rows(rendered) = &layout.body {
                    body::render_rows(body, rendered);
                }
            });

        if let TableBody::Empty { message, .. } = &layout.body {
            body::render_placeholder(ui, message);
        }
    })
    .response
}
