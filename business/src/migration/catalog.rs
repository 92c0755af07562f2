use serde_json::json;

use super::step::{AddColumnSpec, Migration};

/// The named migrations shipped with the console.
#[derive(Debug, Clone)]
pub struct MigrationCatalog {
    migrations: Vec<Migration>,
}

impl MigrationCatalog {
    pub fn builtin() -> Self {
        Self {
            migrations: vec![
                Migration::add_column(
                    "add-profile-role",
                    &AddColumnSpec {
                        table: "profiles".to_owned(),
                        column: "role".to_owned(),
                        sql_type: "text not null default 'clinician'".to_owned(),
                        comment: "Admin console role: admin or clinician".to_owned(),
                        backfill: json!("clinician"),
                    },
                ),
                Migration::add_column(
                    "add-screening-reviewed",
                    &AddColumnSpec {
                        table: "screenings".to_owned(),
                        column: "reviewed".to_owned(),
                        sql_type: "boolean not null default false".to_owned(),
                        comment: "Whether a clinician has reviewed the screening result".to_owned(),
                        backfill: json!(false),
                    },
                ),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&Migration> {
        self.migrations.iter().find(|m| m.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Migration> {
        self.migrations.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.migrations.iter().map(|m| m.name.as_str()).collect()
    }
}
