//! List built-in migrations.

use eyesentry_business::migration::{Migration, MigrationCatalog};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::output::Output;

#[derive(Tabled, Debug, PartialEq, Eq)]
pub struct MigrationRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Steps")]
    pub steps: usize,
    #[tabled(rename = "Procedures")]
    pub procedures: String,
}

impl From<&Migration> for MigrationRow {
    fn from(migration: &Migration) -> Self {
        Self {
            name: migration.name.clone(),
            steps: migration.steps.len(),
            procedures: migration
                .steps
                .iter()
                .map(|s| s.procedure.as_str())
                .collect::<Vec<_>>()
                .join(" → "),
        }
    }
}

pub fn list_rows(catalog: &MigrationCatalog) -> Vec<MigrationRow> {
    catalog.iter().map(MigrationRow::from).collect()
}

pub fn run_list(catalog: &MigrationCatalog) {
    let out = Output::new();
    let rows = list_rows(catalog);

    if rows.is_empty() {
        out.dim("No migrations found.");
        return;
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    out.print(table);
}
