use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Names of the database functions the migrations rely on.
pub mod procedures {
    pub const ADD_COLUMN: &str = "add_column";
    pub const ADD_COLUMN_COMMENT: &str = "add_column_comment";
    pub const BACKFILL_COLUMN: &str = "backfill_column";
}

/// One remote procedure call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationStep {
    pub procedure: String,
    pub params: Value,
}

impl MigrationStep {
    pub fn new(procedure: impl Into<String>, params: Value) -> Self {
        Self {
            procedure: procedure.into(),
            params,
        }
    }

    /// `procedure(params)` as shown by dry runs and logs.
    pub fn describe(&self) -> String {
        format!("{}({})", self.procedure, self.params)
    }
}

/// Column addition handled by the canonical three-step migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddColumnSpec {
    pub table: String,
    pub column: String,
    /// SQL type, e.g. `text` or `boolean not null default false`.
    pub sql_type: String,
    pub comment: String,
    /// Value written into every existing row.
    pub backfill: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Migration {
    pub name: String,
    pub steps: Vec<MigrationStep>,
}

impl Migration {
    pub fn new(name: impl Into<String>, steps: Vec<MigrationStep>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Add the column, document it, then backfill existing rows.
    pub fn add_column(name: impl Into<String>, spec: &AddColumnSpec) -> Self {
        let AddColumnSpec {
            table,
            column,
            sql_type,
            comment,
            backfill,
        } = spec;

        Self::new(
            name,
            vec![
                MigrationStep::new(
                    procedures::ADD_COLUMN,
                    json!({ "table_name": table, "column_name": column, "column_type": sql_type }),
                ),
                MigrationStep::new(
                    procedures::ADD_COLUMN_COMMENT,
                    json!({ "table_name": table, "column_name": column, "comment": comment }),
                ),
                MigrationStep::new(
                    procedures::BACKFILL_COLUMN,
                    json!({ "table_name": table, "column_name": column, "value": backfill }),
                ),
            ],
        )
    }

    pub fn describe(&self) -> Vec<String> {
        self.steps.iter().map(MigrationStep::describe).collect()
    }
}
