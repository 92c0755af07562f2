pub mod data_table;
mod env_version;
mod login_form;

pub use data_table::{DataTableState, data_table};
pub use env_version::env_version;
pub use login_form::{LoginForm, login_form};
