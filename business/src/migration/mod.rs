//! One-off schema migrations executed through database functions.
//!
//! A migration is an ordered list of remote procedure calls. Running it
//! signs in as an admin, calls each procedure in order, stops at the first
//! failure and always signs out afterwards.

mod catalog;
mod runner;
mod step;

pub use catalog::MigrationCatalog;
pub use runner::{MigrationError, MigrationReport, run_migration};
pub use step::{AddColumnSpec, Migration, MigrationStep, procedures};
