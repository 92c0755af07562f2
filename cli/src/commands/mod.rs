//! Command implementations for the migration CLI.

pub mod completions;
pub mod list;
pub mod run;

pub use completions::generate_completions;
pub use list::{list_rows, run_list};
pub use run::{add_column_migration, execute_migration, parse_backfill, run_named};
