//! Run a migration, named or ad hoc.

use anyhow::{Result, bail};
use eyesentry_business::migration::{
    AddColumnSpec, Migration, MigrationCatalog, MigrationReport, run_migration,
};
use serde_json::Value;
use tracing::instrument;

use crate::cli::ConnectionArgs;
use crate::output::Output;

/// `--default` value: JSON when it parses, the raw string otherwise.
pub fn parse_backfill(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

pub fn add_column_migration(
    table: String,
    column: String,
    sql_type: String,
    comment: String,
    default_value: &str,
) -> Migration {
    let name = format!("add-{table}-{column}");
    Migration::add_column(
        name,
        &AddColumnSpec {
            table,
            column,
            sql_type,
            comment,
            backfill: parse_backfill(default_value),
        },
    )
}

pub async fn run_named(
    catalog: &MigrationCatalog,
    name: &str,
    connection: &ConnectionArgs,
    dry_run: bool,
) -> Result<()> {
    let Some(migration) = catalog.get(name) else {
        bail!(
            "Unknown migration `{name}`. Available: {}",
            catalog.names().join(", ")
        );
    };
    execute_migration(migration, connection, dry_run).await
}

/// Prints the plan, then runs it unless `dry_run`.
#[instrument(skip_all, name = "migrate", fields(migration = %migration.name, dry_run))]
pub async fn execute_migration(
    migration: &Migration,
    connection: &ConnectionArgs,
    dry_run: bool,
) -> Result<()> {
    let out = Output::new();

    out.header(format!("Migration {}", migration.name));
    for (index, step) in migration.describe().iter().enumerate() {
        out.print(format!("  {}. {step}", index + 1));
    }

    if dry_run {
        out.dim("Dry run: nothing was sent to the database.");
        return Ok(());
    }

    let client = connection.client()?;
    let credentials = connection.credentials()?;

    let report = run_migration(&client, &credentials, migration).await;
    print_report(&out, &report);

    report.into_result().map(|_| ()).map_err(|err| {
        anyhow::Error::new(err).context(format!("migration `{}` failed", migration.name))
    })
}

fn print_report(out: &Output, report: &MigrationReport) {
    for procedure in &report.completed {
        out.success(procedure);
    }
    if let Some(failure) = &report.failure {
        out.error(failure);
    }
    for procedure in &report.skipped {
        out.dim(format!("skipped {procedure}"));
    }
    if !report.signed_out && !report.completed.is_empty() {
        out.warning("Sign-out failed; the session will expire on its own.");
    }
}
