mod login_page;
mod users_page;

pub use login_page::{loading_page, login_page};
pub use users_page::{PROFILES_TABLE, RowsStatus, UsersPageState, users_page, users_table};
