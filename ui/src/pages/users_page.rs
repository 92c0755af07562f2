//! Registered users of the screening app.

use egui::{Color32, Response, Ui};
use eyesentry_business::table::FieldValue;
use eyesentry_business::{Column, DataTable, Record, TableRecord};

use crate::api;
use crate::state::State;
use crate::widgets::{DataTableState, data_table};

pub const PROFILES_TABLE: &str = "profiles";
const PROFILES_ORDER: &str = "created_at";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RowsStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed(String),
}

pub struct UsersPageState {
    table: DataTable<Record>,
    rows: Vec<Record>,
    status: RowsStatus,
    pub table_state: DataTableState,
}

impl Default for UsersPageState {
    fn default() -> Self {
        Self {
            table: users_table(),
            rows: Vec::new(),
            status: RowsStatus::NotLoaded,
            table_state: DataTableState::new(),
        }
    }
}

impl UsersPageState {
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn status(&self) -> &RowsStatus {
        &self.status
    }

    pub fn apply_rows(&mut self, table: &str, result: Result<Vec<Record>, String>) {
        if table != PROFILES_TABLE {
            return;
        }
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.status = RowsStatus::Loaded;
            }
            Err(message) => self.status = RowsStatus::Failed(message),
        }
    }
}

/// Columns of the users page. Filterable by email.
pub fn users_table() -> DataTable<Record> {
    DataTable::new(vec![
        Column::accessor("email", "Email"),
        Column::accessor("full_name", "Name"),
        Column::accessor("role", "Role"),
        Column::display("joined", "Joined").with_render(joined_date),
    ])
    .with_filter("email")
    .with_filter_placeholder("Filter by email...")
}

/// Date part of the `created_at` timestamp.
fn joined_date(row: &Record) -> String {
    match row.field("created_at") {
        Some(FieldValue::Text(timestamp)) => timestamp
            .split_once('T')
            .map_or(timestamp.clone(), |(date, _)| date.to_owned()),
        _ => String::new(),
    }
}

fn start_fetch(state: &mut State, ctx: &egui::Context) {
    let Some(session) = state.auth.session() else {
        return;
    };
    state.users.status = RowsStatus::Loading;
    api::fetch_rows(
        &state.config,
        session,
        PROFILES_TABLE,
        Some(PROFILES_ORDER),
        state.api_sender(),
        ctx.clone(),
    );
}

pub fn users_page(ui: &mut Ui, state: &mut State) -> Response {
    if state.users.status == RowsStatus::NotLoaded {
        start_fetch(state, ui.ctx());
    }

    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.heading("Users");
            let loading = state.users.status == RowsStatus::Loading;
            if ui.add_enabled(!loading, egui::Button::new("Refresh")).clicked() {
                start_fetch(state, ui.ctx());
            }
            if state.users.status == RowsStatus::Loading {
                ui.spinner();
            }
        });

        if let RowsStatus::Failed(message) = &state.users.status {
            ui.colored_label(Color32::RED, format!("Error: {message}"));
        }

        ui.add_space(8.0);

        let users = &mut state.users;
        data_table(ui, "users_table", &users.table, &users.rows, &mut users.table_state);
    })
    .response
}
